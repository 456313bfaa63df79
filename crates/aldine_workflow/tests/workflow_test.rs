//! Tests for the post workflow service.

use aldine_core::{PostDraft, PostDraftBuilder, PostPatch, PostStatus};
use aldine_error::{AldineErrorKind, WorkflowErrorKind};
use aldine_repository::InMemoryPostStore;
use aldine_workflow::PostWorkflow;
use std::sync::Arc;
use strum::IntoEnumIterator;

fn workflow() -> PostWorkflow {
    PostWorkflow::new(Arc::new(InMemoryPostStore::new()))
}

fn draft(author_name: Option<&str>) -> PostDraft {
    PostDraftBuilder::default()
        .title("Title".to_string())
        .content("Content".to_string())
        .author_name(author_name.map(String::from))
        .build()
        .expect("valid draft")
}

/// Drive a post along allowed edges until it holds `status`.
async fn post_in_status(workflow: &PostWorkflow, status: PostStatus) -> i64 {
    let post = workflow.create_draft(draft(None)).await.expect("draft");
    let path: &[PostStatus] = match status {
        PostStatus::Draft => &[],
        PostStatus::Review => &[PostStatus::Review],
        PostStatus::Approved => &[PostStatus::Review, PostStatus::Approved],
        PostStatus::Published => &[
            PostStatus::Review,
            PostStatus::Approved,
            PostStatus::Published,
        ],
    };
    for next in path {
        workflow
            .change_status(post.id, *next)
            .await
            .expect("allowed edge");
    }
    post.id
}

fn assert_invalid_transition(err: aldine_error::AldineError, from: PostStatus, to: PostStatus) {
    match err.kind() {
        AldineErrorKind::Workflow(e) => {
            assert_eq!(e.kind, WorkflowErrorKind::InvalidTransition { from, to });
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[tokio::test]
async fn create_draft_sets_status_and_timestamps() {
    let workflow = workflow();
    let post = workflow.create_draft(draft(None)).await.expect("draft");

    assert_eq!(post.status, PostStatus::Draft);
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn create_draft_defaults_blank_author_to_anonymous() {
    let workflow = workflow();

    let missing = workflow.create_draft(draft(None)).await.expect("draft");
    assert_eq!(missing.author_name, "Anonymous");

    let blank = workflow.create_draft(draft(Some("   "))).await.expect("draft");
    assert_eq!(blank.author_name, "Anonymous");

    let named = workflow.create_draft(draft(Some("Jane"))).await.expect("draft");
    assert_eq!(named.author_name, "Jane");
}

#[tokio::test]
async fn every_disallowed_pair_is_rejected() {
    let allowed = [
        (PostStatus::Draft, PostStatus::Review),
        (PostStatus::Review, PostStatus::Approved),
        (PostStatus::Review, PostStatus::Draft),
        (PostStatus::Approved, PostStatus::Published),
        (PostStatus::Approved, PostStatus::Review),
    ];

    let workflow = workflow();
    for from in PostStatus::iter() {
        for to in PostStatus::iter() {
            if allowed.contains(&(from, to)) {
                continue;
            }
            let id = post_in_status(&workflow, from).await;
            let err = workflow
                .change_status(id, to)
                .await
                .expect_err("disallowed pair must fail");
            assert_invalid_transition(err, from, to);
        }
    }
}

#[tokio::test]
async fn allowed_edges_update_status_and_timestamp() {
    let workflow = workflow();
    let post = workflow.create_draft(draft(None)).await.expect("draft");

    let reviewed = workflow
        .change_status(post.id, PostStatus::Review)
        .await
        .expect("draft to review");
    assert_eq!(reviewed.status, PostStatus::Review);
    assert!(reviewed.updated_at >= post.updated_at);

    // Back-transition to draft is an allowed edge
    let back = workflow
        .change_status(post.id, PostStatus::Draft)
        .await
        .expect("review to draft");
    assert_eq!(back.status, PostStatus::Draft);
}

#[tokio::test]
async fn published_is_terminal() {
    let workflow = workflow();
    let id = post_in_status(&workflow, PostStatus::Published).await;

    for to in PostStatus::iter() {
        let err = workflow
            .change_status(id, to)
            .await
            .expect_err("published accepts nothing");
        assert_invalid_transition(err, PostStatus::Published, to);
    }
}

#[tokio::test]
async fn change_status_of_missing_post_is_not_found() {
    let workflow = workflow();
    let err = workflow
        .change_status(999, PostStatus::Review)
        .await
        .expect_err("missing post");
    match err.kind() {
        AldineErrorKind::Workflow(e) => {
            assert_eq!(e.kind, WorkflowErrorKind::PostNotFound(999));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[tokio::test]
async fn get_post_returns_stored_post() {
    let workflow = workflow();
    let post = workflow.create_draft(draft(Some("Jane"))).await.expect("draft");

    let fetched = workflow.get_post(post.id).await.expect("get");
    assert_eq!(fetched, post);

    assert!(workflow.get_post(post.id + 1).await.is_err());
}

#[tokio::test]
async fn delete_post_removes_it() {
    let workflow = workflow();
    let post = workflow.create_draft(draft(None)).await.expect("draft");

    workflow.delete_post(post.id).await.expect("delete");
    assert!(workflow.get_post(post.id).await.is_err());
    assert!(workflow.get_all_posts().await.expect("all").is_empty());
}

#[tokio::test]
async fn update_post_overwrites_title_and_content() {
    let workflow = workflow();
    let post = workflow.create_draft(draft(Some("Jane"))).await.expect("draft");

    let updated = workflow
        .update_post(
            post.id,
            PostPatch {
                title: "New title".to_string(),
                content: "New content".to_string(),
                rich_content: None,
                author_name: None,
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "New content");
    // Missing author name leaves the stored one alone
    assert_eq!(updated.author_name, "Jane");
    assert!(updated.updated_at >= post.updated_at);
    // Status is never touched by a patch
    assert_eq!(updated.status, PostStatus::Draft);
}

#[tokio::test]
async fn update_post_ignores_blank_author_name() {
    let workflow = workflow();
    let post = workflow.create_draft(draft(Some("Jane"))).await.expect("draft");

    let updated = workflow
        .update_post(
            post.id,
            PostPatch {
                title: "t".to_string(),
                content: "c".to_string(),
                rich_content: None,
                author_name: Some("  ".to_string()),
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.author_name, "Jane");

    let renamed = workflow
        .update_post(
            post.id,
            PostPatch {
                title: "t".to_string(),
                content: "c".to_string(),
                rich_content: None,
                author_name: Some("June".to_string()),
            },
        )
        .await
        .expect("update");
    assert_eq!(renamed.author_name, "June");
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let workflow = workflow();
    let err = workflow
        .update_post(1, PostPatch::default())
        .await
        .expect_err("missing post");
    assert!(matches!(err.kind(), AldineErrorKind::Workflow(_)));
}
