mod helpers;

mod action_http_test;
mod guard_test;
mod rest_api_test;
mod rpc_test;
