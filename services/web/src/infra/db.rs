use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, ModelTrait as _,
    QueryOrder,
};

use aoba_web_schema::{orders, users};

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, Order, User, UserUpdate, UserWithOrders};
use crate::error::WebServiceError;

/// SeaORM-backed user repository. Holds a clone of the process-wide
/// connection; all pooling lives in the connection itself.
#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserWithOrders>, WebServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        let Some(model) = model else {
            return Ok(None);
        };
        let orders = model
            .find_related(orders::Entity)
            .all(&self.db)
            .await
            .context("list orders for user")?;
        Ok(Some(UserWithOrders {
            user: user_from_model(model),
            orders: orders.into_iter().map(order_from_model).collect(),
        }))
    }

    async fn list(&self) -> Result<Vec<UserWithOrders>, WebServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            let orders = model
                .find_related(orders::Entity)
                .all(&self.db)
                .await
                .context("list orders for user")?;
            results.push(UserWithOrders {
                user: user_from_model(model),
                orders: orders.into_iter().map(order_from_model).collect(),
            });
        }
        Ok(results)
    }

    async fn create(&self, user: &NewUser) -> Result<User, WebServiceError> {
        let model = users::ActiveModel {
            name: Set(user.name.clone()),
            url: Set(user.url.clone()),
            phone: Set(user.phone.clone()),
            email: Set(user.email.clone()),
            create_at: Set(user.create_at),
            update_at: Set(user.update_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn update(&self, user: &UserUpdate) -> Result<User, WebServiceError> {
        // errors (RecordNotUpdated) when the id matches no row
        let model = users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            url: Set(user.url.clone()),
            phone: Set(user.phone.clone()),
            email: Set(user.email.clone()),
            create_at: Set(user.create_at),
            update_at: Set(user.update_at),
        }
        .update(&self.db)
        .await
        .context("update user")?;
        Ok(user_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<User, WebServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for delete")?
            .ok_or_else(|| anyhow::anyhow!("delete user: no row with id {id}"))?;
        let user = user_from_model(model.clone());
        model.delete(&self.db).await.context("delete user")?;
        Ok(user)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        url: model.url,
        phone: model.phone,
        email: model.email,
        create_at: model.create_at,
        update_at: model.update_at,
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        order_date: model.order_date,
        total_price: model.total_price,
    }
}
