use std::sync::Arc;

use axum::{Form, extract::State, http::StatusCode};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::entities::{subscribers, subscriptions};

#[derive(serde::Deserialize, Clone)]
pub struct FormData {
    subscriber_id: i32,
    magazine_id: i32,
}

#[tracing::instrument(
    name = "创建一条订阅记录",
    skip(state, form),
    fields(
        request_id = %Uuid::new_v4(),
        subscriber_id = %form.subscriber_id,
        magazine_id = %form.magazine_id
    )
)]
pub async fn create_subscription(
    State(state): State<Arc<DatabaseConnection>>,
    form: Form<FormData>,
) -> StatusCode {
    // 订阅者必须存在；magazine_id 不做存在性检查
    let subscriber = match subscribers::Entity::find_by_id(form.subscriber_id)
        .one(state.as_ref())
        .await
    {
        Ok(Some(subscriber)) => subscriber,
        Ok(None) => {
            tracing::warn!("订阅者 {} 不存在", form.subscriber_id);
            return StatusCode::NOT_FOUND;
        }
        Err(e) => {
            tracing::error!("查询订阅者时发生错误: {:?}", e);
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    match insert_subscription(&state, subscriber.id, form.magazine_id).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("保存订阅记录时发生错误: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[tracing::instrument(name = "保存订阅记录", skip(db))]
pub async fn insert_subscription(
    db: &DatabaseConnection,
    subscriber_id: i32,
    magazine_id: i32,
) -> Result<subscriptions::Model, DbErr> {
    // start 和 duration 不通过该接口设置，保持 NULL
    let subscription = subscriptions::ActiveModel {
        subscriber_id: Set(Some(subscriber_id)),
        magazine_id: Set(Some(magazine_id)),
        ..Default::default()
    };

    subscription.insert(db).await.map_err(|e| {
        tracing::error!("执行插入语句失败: {:?}", e);
        e
    })
}
