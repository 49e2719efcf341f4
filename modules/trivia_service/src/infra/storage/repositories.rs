//! SeaORM repository implementations

use crate::contract::{Category, NewQuestion, Question};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use anyhow::{bail, Result};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set}, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::sync::Arc;

use super::entity::{category, question};

// ===== Category Repository =====

pub struct SeaOrmCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let results = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>> {
        let result = category::Entity::find_by_id(category_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, label: &str) -> Result<Category> {
        let txn = self.db.begin().await?;
        let active = category::ActiveModel {
            id: NotSet,
            r#type: Set(label.to_string()),
        };
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }
}

// ===== Question Repository =====

pub struct SeaOrmQuestionRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmQuestionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionRepository for SeaOrmQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>> {
        let results = question::Entity::find()
            .order_by_asc(question::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let results = question::Entity::find()
            .filter(question::Column::Category.eq(category_id))
            .order_by_asc(question::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new_question: &NewQuestion) -> Result<Question> {
        let txn = self.db.begin().await?;
        let category = category::Entity::find_by_id(new_question.category)
            .one(&txn)
            .await?;
        if category.is_none() {
            txn.rollback().await?;
            bail!("category {} does not exist", new_question.category);
        }

        let active: question::ActiveModel = new_question.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete(&self, question_id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;
        let result = question::Entity::delete_by_id(question_id)
            .exec(&txn)
            .await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
