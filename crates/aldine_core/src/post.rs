//! Blog post types and the status transition graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a blog post.
///
/// Posts move along a fixed whitelist of transitions:
/// Draft → Review → Approved → Published, with back-edges
/// Review → Draft and Approved → Review. Published is terminal.
///
/// # Examples
///
/// ```
/// use aldine_core::PostStatus;
///
/// assert!(PostStatus::Draft.can_transition_to(PostStatus::Review));
/// assert!(!PostStatus::Published.can_transition_to(PostStatus::Draft));
/// assert!(!PostStatus::Draft.can_transition_to(PostStatus::Draft));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum PostStatus {
    /// Initial state for newly created posts
    #[display("DRAFT")]
    Draft,
    /// Submitted for editorial review
    #[display("REVIEW")]
    Review,
    /// Review passed, awaiting publication
    #[display("APPROVED")]
    Approved,
    /// Publicly visible; terminal state
    #[display("PUBLISHED")]
    Published,
}

impl PostStatus {
    /// Whether moving from `self` to `next` is an allowed transition.
    ///
    /// The transition table is a strict whitelist: self-loops and state
    /// skipping are rejected, and nothing leaves `Published`.
    pub fn can_transition_to(self, next: PostStatus) -> bool {
        matches!(
            (self, next),
            (PostStatus::Draft, PostStatus::Review)
                | (PostStatus::Review, PostStatus::Approved)
                | (PostStatus::Review, PostStatus::Draft)
                | (PostStatus::Approved, PostStatus::Published)
                | (PostStatus::Approved, PostStatus::Review)
        )
    }

    /// String representation for persistence and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Review => "REVIEW",
            PostStatus::Approved => "APPROVED",
            PostStatus::Published => "PUBLISHED",
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(PostStatus::Draft),
            "REVIEW" => Ok(PostStatus::Review),
            "APPROVED" => Ok(PostStatus::Approved),
            "PUBLISHED" => Ok(PostStatus::Published),
            _ => Err(format!("Unknown post status: {}", s)),
        }
    }
}

/// A stored blog post.
///
/// The id is assigned by the post store on insert and immutable afterwards.
/// Owned media are indexed by the media store under `post_id`; the post
/// itself carries no embedded media list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier
    pub id: i64,
    /// Post title
    pub title: String,
    /// Plain-text body
    pub content: String,
    /// Optional HTML body with inline media
    pub rich_content: Option<String>,
    /// Current lifecycle status
    pub status: PostStatus,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation; always >= `created_at`
    pub updated_at: DateTime<Utc>,
    /// Identifier of the authoring user, when known
    pub author_id: Option<i64>,
    /// Display name; defaults to "Anonymous" at creation
    pub author_name: String,
}

/// Insert-side value for a post, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    /// Post title
    pub title: String,
    /// Plain-text body
    pub content: String,
    /// Optional HTML body with inline media
    pub rich_content: Option<String>,
    /// Current lifecycle status
    pub status: PostStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Identifier of the authoring user, when known
    pub author_id: Option<i64>,
    /// Display name
    pub author_name: String,
}

impl NewPost {
    /// Attach a store-assigned id, producing the stored record.
    pub fn with_id(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            rich_content: self.rich_content,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            author_id: self.author_id,
            author_name: self.author_name,
        }
    }
}

/// Input for creating a draft post.
///
/// # Examples
///
/// ```
/// use aldine_core::PostDraftBuilder;
///
/// let draft = PostDraftBuilder::default()
///     .title("Hello".to_string())
///     .content("First post".to_string())
///     .build()
///     .unwrap();
/// assert!(draft.author_name.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default)]
pub struct PostDraft {
    /// Post title
    pub title: String,
    /// Plain-text body
    pub content: String,
    /// Optional HTML body with inline media
    pub rich_content: Option<String>,
    /// Identifier of the authoring user, when known
    pub author_id: Option<i64>,
    /// Display name; None or blank falls back to "Anonymous"
    pub author_name: Option<String>,
}

/// Patch applied by `update_post`.
///
/// Title and content always overwrite; `author_name` only applies when
/// non-blank, and `rich_content` only when `Some`. Status and media
/// associations are never touched by a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    /// Replacement title
    pub title: String,
    /// Replacement body
    pub content: String,
    /// Replacement rich body, applied only when `Some`
    pub rich_content: Option<String>,
    /// Replacement author name, applied only when non-blank
    pub author_name: Option<String>,
}
