//! 存储层行为测试（内存 SQLite + 真实迁移）

use super::test_support::{memory_storage, seed_event, seed_paper, seed_user};
use crate::errors::ConfSysError;
use crate::models::papers::entities::PaperStatus;
use crate::models::reviews::requests::SubmitReviewRequest;
use crate::models::users::entities::UserRole;

fn review(comments: &str) -> SubmitReviewRequest {
    SubmitReviewRequest {
        comments: comments.to_string(),
        insights: vec!["well structured".to_string()],
    }
}

#[tokio::test]
async fn test_upsert_review_keeps_single_row() {
    let storage = memory_storage().await;
    let author = seed_user(&storage, "author@example.com", vec![UserRole::Author]).await;
    let reviewer = seed_user(&storage, "reviewer@example.com", vec![UserRole::Reviewer]).await;
    let paper = seed_paper(&storage, author.id, None).await;

    storage
        .upsert_review_impl(paper.id, reviewer.id, review("first pass"))
        .await
        .unwrap();
    let updated = storage
        .upsert_review_impl(paper.id, reviewer.id, review("second pass"))
        .await
        .unwrap();

    // 重复提交覆盖而不是追加
    assert_eq!(storage.count_reviews_impl().await.unwrap(), 1);
    assert_eq!(updated.comments, "second pass");
}

#[tokio::test]
async fn test_two_reviewers_yield_two_reviews() {
    let storage = memory_storage().await;
    let author = seed_user(&storage, "author@example.com", vec![UserRole::Author]).await;
    let alice = seed_user(&storage, "alice@example.com", vec![UserRole::Reviewer]).await;
    let bob = seed_user(&storage, "bob@example.com", vec![UserRole::Reviewer]).await;
    let paper = seed_paper(&storage, author.id, None).await;

    storage
        .upsert_review_impl(paper.id, alice.id, review("solid work"))
        .await
        .unwrap();
    storage
        .upsert_review_impl(paper.id, bob.id, review("needs more evaluation"))
        .await
        .unwrap();

    assert_eq!(storage.count_reviews_impl().await.unwrap(), 2);
    let reviews = storage.list_reviews_for_paper_impl(paper.id).await.unwrap();
    assert_eq!(reviews.len(), 2);
}

#[tokio::test]
async fn test_event_status_counts_add_up() {
    let storage = memory_storage().await;
    let author = seed_user(&storage, "author@example.com", vec![UserRole::Author]).await;
    let coordinator = seed_user(
        &storage,
        "coordinator@example.com",
        vec![UserRole::Coordinator],
    )
    .await;
    let event = seed_event(&storage, coordinator.id).await;

    let accepted = seed_paper(&storage, author.id, Some(event.id)).await;
    let rejected = seed_paper(&storage, author.id, Some(event.id)).await;
    seed_paper(&storage, author.id, Some(event.id)).await;
    seed_paper(&storage, author.id, Some(event.id)).await;

    for (paper_id, terminal) in [
        (accepted.id, PaperStatus::Accepted),
        (rejected.id, PaperStatus::Rejected),
    ] {
        assert!(
            storage
                .update_paper_status_cas_impl(
                    paper_id,
                    PaperStatus::Submitted,
                    PaperStatus::UnderReview
                )
                .await
                .unwrap()
        );
        assert!(
            storage
                .update_paper_status_cas_impl(paper_id, PaperStatus::UnderReview, terminal)
                .await
                .unwrap()
        );
    }

    let counts = storage
        .count_event_papers_by_status_impl(event.id)
        .await
        .unwrap();
    assert_eq!(counts.total, 4);
    assert_eq!(counts.selected, 1);
    assert_eq!(counts.rejected, 1);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.total, counts.selected + counts.rejected + counts.pending);

    // 报表导出的数据源与 selected 统计一致
    let accepted_papers = storage
        .list_papers_by_event_impl(event.id, Some(PaperStatus::Accepted))
        .await
        .unwrap();
    assert_eq!(accepted_papers.len() as i64, counts.selected);
}

#[tokio::test]
async fn test_assigned_queue_hides_decided_papers() {
    let storage = memory_storage().await;
    let author = seed_user(&storage, "author@example.com", vec![UserRole::Author]).await;
    let reviewer = seed_user(&storage, "reviewer@example.com", vec![UserRole::Reviewer]).await;
    let coordinator = seed_user(
        &storage,
        "coordinator@example.com",
        vec![UserRole::Coordinator],
    )
    .await;
    let event = seed_event(&storage, coordinator.id).await;

    let decided = seed_paper(&storage, author.id, Some(event.id)).await;
    let open = seed_paper(&storage, author.id, Some(event.id)).await;
    for paper_id in [decided.id, open.id] {
        assert!(
            storage
                .create_assignment_impl(event.id, reviewer.id, paper_id)
                .await
                .unwrap()
        );
    }

    let queue = storage.list_assigned_papers_impl(reviewer.id).await.unwrap();
    assert_eq!(queue.len(), 2);

    // 走合法边推进到终态后，该论文离开待审队列
    storage
        .update_paper_status_cas_impl(decided.id, PaperStatus::Submitted, PaperStatus::UnderReview)
        .await
        .unwrap();
    storage
        .update_paper_status_cas_impl(decided.id, PaperStatus::UnderReview, PaperStatus::Accepted)
        .await
        .unwrap();
    // under_review 的论文仍然在队列里
    storage
        .update_paper_status_cas_impl(open.id, PaperStatus::Submitted, PaperStatus::UnderReview)
        .await
        .unwrap();

    let queue = storage.list_assigned_papers_impl(reviewer.id).await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].paper.paper.id, open.id);
    assert_eq!(queue[0].paper.paper.status, PaperStatus::UnderReview);
}

#[tokio::test]
async fn test_duplicate_assignment_returns_false() {
    let storage = memory_storage().await;
    let author = seed_user(&storage, "author@example.com", vec![UserRole::Author]).await;
    let reviewer = seed_user(&storage, "reviewer@example.com", vec![UserRole::Reviewer]).await;
    let coordinator = seed_user(
        &storage,
        "coordinator@example.com",
        vec![UserRole::Coordinator],
    )
    .await;
    let event = seed_event(&storage, coordinator.id).await;
    let paper = seed_paper(&storage, author.id, Some(event.id)).await;

    assert!(
        storage
            .create_assignment_impl(event.id, reviewer.id, paper.id)
            .await
            .unwrap()
    );
    assert!(
        !storage
            .create_assignment_impl(event.id, reviewer.id, paper.id)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_duplicate_email_maps_to_conflict() {
    let storage = memory_storage().await;
    seed_user(&storage, "dup@example.com", vec![UserRole::Author]).await;

    let second = storage
        .create_user_impl(crate::models::users::requests::CreateUserRequest {
            name: "dup".to_string(),
            email: "dup@example.com".to_string(),
            password: "hashed-password".to_string(),
            roles: vec![UserRole::Reviewer],
            contact_number: None,
        })
        .await;

    assert!(matches!(second, Err(ConfSysError::Conflict(_))));
    assert_eq!(storage.count_users_impl().await.unwrap(), 1);
}
