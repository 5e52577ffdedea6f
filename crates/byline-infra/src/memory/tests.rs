use std::sync::Arc;

use byline_core::domain::{Author, Category};
use byline_core::error::{DomainError, RepoError, ValidationKind};
use byline_core::manager::{
    AuthorManager, AuthorPatch, NewAuthor, NewPost, PostManager, PostPatch,
};
use byline_core::ports::{AuthorRepository, BaseRepository, PostRepository};

use super::{InMemoryAuthorRepository, InMemoryPostRepository};

fn author_manager() -> (
    AuthorManager<InMemoryAuthorRepository>,
    Arc<InMemoryAuthorRepository>,
) {
    let repo = Arc::new(InMemoryAuthorRepository::new());
    (AuthorManager::new(repo.clone()), repo)
}

fn post_manager() -> (
    PostManager<InMemoryPostRepository>,
    Arc<InMemoryPostRepository>,
) {
    let repo = Arc::new(InMemoryPostRepository::new());
    (PostManager::new(repo.clone()), repo)
}

fn new_author(name: &str, phone: Option<&str>) -> NewAuthor {
    NewAuthor {
        name: name.to_string(),
        phone_number: phone.map(str::to_string),
    }
}

fn new_post(title: &str, content_len: usize, category: Option<&str>) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: "x".repeat(content_len),
        summary: None,
        category: category.map(str::to_string),
        author_id: None,
    }
}

fn assert_validation(err: DomainError, kind: ValidationKind) {
    match err {
        DomainError::Validation(v) => assert_eq!(v.kind, kind),
        other => panic!("expected validation error, got: {other:?}"),
    }
}

#[tokio::test]
async fn create_author_assigns_id_and_timestamps() {
    let (manager, repo) = author_manager();

    let author = manager
        .create(new_author("Jane Doe", Some("5551234567")))
        .await
        .unwrap();

    assert_eq!(author.name, "Jane Doe");
    assert_eq!(author.phone_number.as_deref(), Some("5551234567"));
    assert_eq!(author.created_at, author.updated_at);

    let stored = repo.find_by_id(author.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Jane Doe");
}

#[tokio::test]
async fn create_author_rejects_bad_phone_and_persists_nothing() {
    let (manager, repo) = author_manager();

    let err = manager
        .create(new_author("Jane Doe", Some("123")))
        .await
        .unwrap_err();

    assert_validation(err, ValidationKind::InvalidPhoneFormat);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_author_rejects_blank_name() {
    let (manager, repo) = author_manager();

    let err = manager.create(new_author("   ", None)).await.unwrap_err();

    assert_validation(err, ValidationKind::EmptyName);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_author_rejects_duplicate_name() {
    let (manager, repo) = author_manager();

    manager.create(new_author("Jane Doe", None)).await.unwrap();
    let err = manager
        .create(new_author("Jane Doe", None))
        .await
        .unwrap_err();

    assert_validation(err, ValidationKind::DuplicateName);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_name_check_is_case_sensitive() {
    let (manager, _repo) = author_manager();

    manager.create(new_author("Jane Doe", None)).await.unwrap();
    // Different case is a different name.
    assert!(manager.create(new_author("jane doe", None)).await.is_ok());
}

#[tokio::test]
async fn update_author_keeping_own_name_succeeds() {
    let (manager, _repo) = author_manager();

    let author = manager.create(new_author("Jane Doe", None)).await.unwrap();
    let patch = AuthorPatch {
        name: Some("Jane Doe".to_string()),
        ..Default::default()
    };

    let updated = manager.update(author.id, patch).await.unwrap();
    assert_eq!(updated.name, "Jane Doe");
    assert!(updated.updated_at >= author.updated_at);
}

#[tokio::test]
async fn update_author_to_taken_name_fails() {
    let (manager, repo) = author_manager();

    manager.create(new_author("Jane Doe", None)).await.unwrap();
    let other = manager.create(new_author("John Roe", None)).await.unwrap();

    let patch = AuthorPatch {
        name: Some("Jane Doe".to_string()),
        ..Default::default()
    };
    let err = manager.update(other.id, patch).await.unwrap_err();

    assert_validation(err, ValidationKind::DuplicateName);
    // Record is untouched.
    let stored = repo.find_by_id(other.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "John Roe");
}

#[tokio::test]
async fn update_author_clears_phone_number() {
    let (manager, _repo) = author_manager();

    let author = manager
        .create(new_author("Jane Doe", Some("5551234567")))
        .await
        .unwrap();

    let patch = AuthorPatch {
        phone_number: Some(None),
        ..Default::default()
    };
    let updated = manager.update(author.id, patch).await.unwrap();
    assert_eq!(updated.phone_number, None);
}

#[tokio::test]
async fn update_author_rejects_bad_phone_and_leaves_record_unchanged() {
    let (manager, repo) = author_manager();

    let author = manager
        .create(new_author("Jane Doe", Some("5551234567")))
        .await
        .unwrap();

    let patch = AuthorPatch {
        phone_number: Some(Some("555-123".to_string())),
        ..Default::default()
    };
    let err = manager.update(author.id, patch).await.unwrap_err();

    assert_validation(err, ValidationKind::InvalidPhoneFormat);
    let stored = repo.find_by_id(author.id).await.unwrap().unwrap();
    assert_eq!(stored.phone_number.as_deref(), Some("5551234567"));
}

#[tokio::test]
async fn update_missing_author_is_not_found() {
    let (manager, _repo) = author_manager();

    let err = manager
        .update(uuid::Uuid::new_v4(), AuthorPatch::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn concurrent_duplicate_surfaces_as_constraint_not_validation() {
    let repo = InMemoryAuthorRepository::new();

    repo.save(Author::new("Jane Doe".to_string(), None))
        .await
        .unwrap();
    // A second writer that raced past the pre-check hits the store's unique
    // constraint directly.
    let err = repo
        .save(Author::new("Jane Doe".to_string(), None))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn create_post_succeeds_and_links_author() {
    let (manager, repo) = post_manager();
    let author_id = uuid::Uuid::new_v4();

    let mut input = new_post("Top 10 Secrets", 300, Some("Fiction"));
    input.author_id = Some(author_id);
    input.summary = Some("A short summary.".to_string());

    let post = manager.create(input).await.unwrap();

    assert_eq!(post.category, Category::Fiction);
    assert_eq!(post.author_id, Some(author_id));

    let owned = repo.find_by_author_id(author_id).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, post.id);
}

#[tokio::test]
async fn create_post_without_author_is_allowed() {
    let (manager, _repo) = post_manager();

    let post = manager
        .create(new_post("Guess the Ending", 250, Some("Non-Fiction")))
        .await
        .unwrap();

    assert_eq!(post.author_id, None);
    assert_eq!(post.category, Category::NonFiction);
}

#[tokio::test]
async fn create_post_rejects_ordinary_title() {
    let (manager, repo) = post_manager();

    let err = manager
        .create(new_post("An Ordinary Day", 300, Some("Fiction")))
        .await
        .unwrap_err();

    assert_validation(err, ValidationKind::MissingRequiredPhrase);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn create_post_rejects_short_content() {
    let (manager, repo) = post_manager();

    let err = manager
        .create(new_post("Top 10 Secrets", 249, Some("Fiction")))
        .await
        .unwrap_err();

    assert_validation(err, ValidationKind::ContentTooShort);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn create_post_rejects_long_summary() {
    let (manager, repo) = post_manager();

    let mut input = new_post("Top 10 Secrets", 300, Some("Fiction"));
    input.summary = Some("s".repeat(251));

    let err = manager.create(input).await.unwrap_err();

    assert_validation(err, ValidationKind::SummaryTooLong);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn create_post_rejects_missing_category() {
    let (manager, repo) = post_manager();

    let err = manager
        .create(new_post("Top 10 Secrets", 300, None))
        .await
        .unwrap_err();

    assert_validation(err, ValidationKind::InvalidCategory);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn update_post_revalidates_changed_fields() {
    let (manager, _repo) = post_manager();

    let post = manager
        .create(new_post("Top 10 Secrets", 300, Some("Fiction")))
        .await
        .unwrap();

    let patch = PostPatch {
        title: Some("No Hook Here".to_string()),
        ..Default::default()
    };
    let err = manager.update(post.id, patch).await.unwrap_err();
    assert_validation(err, ValidationKind::MissingRequiredPhrase);

    let patch = PostPatch {
        title: Some("You Won't Believe This".to_string()),
        category: Some("Non-Fiction".to_string()),
        ..Default::default()
    };
    let updated = manager.update(post.id, patch).await.unwrap();
    assert_eq!(updated.title, "You Won't Believe This");
    assert_eq!(updated.category, Category::NonFiction);
    assert_eq!(updated.created_at, post.created_at);
    assert!(updated.updated_at >= post.updated_at);
}

#[tokio::test]
async fn update_post_detaches_author() {
    let (manager, repo) = post_manager();
    let author_id = uuid::Uuid::new_v4();

    let mut input = new_post("Top 10 Secrets", 300, Some("Fiction"));
    input.author_id = Some(author_id);
    let post = manager.create(input).await.unwrap();

    let patch = PostPatch {
        author_id: Some(None),
        ..Default::default()
    };
    let updated = manager.update(post.id, patch).await.unwrap();

    assert_eq!(updated.author_id, None);
    assert!(repo.find_by_author_id(author_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let (manager, _repo) = post_manager();

    let err = manager
        .update(uuid::Uuid::new_v4(), PostPatch::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { .. }));
}
