//! SeaORM repositories against an in-memory SQLite database

mod common;

use common::*;
use trivia_service::domain::repository::{CategoryRepository, QuestionRepository};
use trivia_service::infra::storage::repositories::{
    SeaOrmCategoryRepository, SeaOrmQuestionRepository,
};

#[tokio::test]
async fn categories_are_listed_by_id() {
    let db = sqlite_db().await;
    let categories = SeaOrmCategoryRepository::new(db);

    let science = categories.create("Science").await.unwrap();
    let art = categories.create("Art").await.unwrap();
    assert!(art.id > science.id);

    let all = categories.list_all().await.unwrap();
    let labels: Vec<&str> = all.iter().map(|c| c.r#type.as_str()).collect();
    assert_eq!(labels, vec!["Science", "Art"]);

    let found = categories.find_by_id(art.id).await.unwrap().unwrap();
    assert_eq!(found, art);
    assert!(categories.find_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn questions_filter_by_category() {
    let db = sqlite_db().await;
    let categories = SeaOrmCategoryRepository::new(db.clone());
    let questions = SeaOrmQuestionRepository::new(db);

    let science = categories.create("Science").await.unwrap();
    let art = categories.create("Art").await.unwrap();
    let h2o = questions
        .create(&new_question("What is H2O?", science.id))
        .await
        .unwrap();
    questions
        .create(&new_question("Who painted the Mona Lisa?", art.id))
        .await
        .unwrap();
    let sun = questions
        .create(&new_question("What is the closest star?", science.id))
        .await
        .unwrap();

    assert_eq!(h2o.answer, "42");
    assert_eq!(h2o.difficulty, 3);

    let science_questions = questions.list_by_category(science.id).await.unwrap();
    let ids: Vec<i32> = science_questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![h2o.id, sun.id]);

    assert_eq!(questions.list_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn question_requires_existing_category() {
    let db = sqlite_db().await;
    let questions = SeaOrmQuestionRepository::new(db);

    let result = questions.create(&new_question("Orphan?", 77)).await;
    assert!(result.is_err());
    assert!(questions.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_reports_whether_a_row_went_away() {
    let db = sqlite_db().await;
    let categories = SeaOrmCategoryRepository::new(db.clone());
    let questions = SeaOrmQuestionRepository::new(db);

    let science = categories.create("Science").await.unwrap();
    let question = questions
        .create(&new_question("What is H2O?", science.id))
        .await
        .unwrap();

    assert!(questions.delete(question.id).await.unwrap());
    assert!(!questions.delete(question.id).await.unwrap());
    assert!(questions.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn migrating_again_keeps_data() {
    let db = sqlite_db().await;
    let categories = SeaOrmCategoryRepository::new(db.clone());
    let science = categories.create("Science").await.unwrap();

    trivia_service::TriviaServiceModule::default()
        .migrate(&db)
        .await
        .unwrap();

    assert_eq!(categories.list_all().await.unwrap(), vec![science]);
}
