//! Community feed operations.
//!
//! Posts are never edited or deleted. Likes and saves toggle per user,
//! comments append. Every mutation returns the full updated feed so callers
//! can rerender without a second read; mutations against a missing post id
//! are silent no-ops that still return the current feed.

use super::{Store, COMMUNITY_POSTS_KEY};
use crate::errors::Result;
use crate::models::{Comment, CommunityPost};
use chrono::Utc;
use uuid::Uuid;

impl Store {
    /// Returns the community feed, newest post first.
    pub async fn get_community_posts(&self) -> Result<Vec<CommunityPost>> {
        self.pause().await;
        self.load_collection(COMMUNITY_POSTS_KEY).await
    }

    /// Publishes a new post at the head of the feed with a generated id and
    /// empty like, save and comment lists. Returns the updated feed.
    pub async fn create_community_post(
        &self,
        user_id: &str,
        user_name: &str,
        user_avatar: Option<String>,
        destination_tag: &str,
        content: &str,
        image: Option<String>,
    ) -> Result<Vec<CommunityPost>> {
        self.pause().await;

        let post = CommunityPost {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            user_avatar,
            destination_tag: destination_tag.to_string(),
            content: content.to_string(),
            image,
            likes: Vec::new(),
            saved_by: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        };

        let mut posts: Vec<CommunityPost> = self.load_collection(COMMUNITY_POSTS_KEY).await?;
        posts.insert(0, post);
        self.save_collection(COMMUNITY_POSTS_KEY, &posts).await?;
        Ok(posts)
    }

    /// Toggles `user_id`'s like on a post. Returns the updated feed.
    pub async fn toggle_post_like(
        &self,
        post_id: &str,
        user_id: &str,
    ) -> Result<Vec<CommunityPost>> {
        self.pause().await;
        let mut posts: Vec<CommunityPost> = self.load_collection(COMMUNITY_POSTS_KEY).await?;

        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            if let Some(pos) = post.likes.iter().position(|id| id == user_id) {
                post.likes.remove(pos);
            } else {
                post.likes.push(user_id.to_string());
            }
            self.save_collection(COMMUNITY_POSTS_KEY, &posts).await?;
        }
        Ok(posts)
    }

    /// Toggles `user_id`'s save on a post. Returns the updated feed.
    pub async fn toggle_post_save(
        &self,
        post_id: &str,
        user_id: &str,
    ) -> Result<Vec<CommunityPost>> {
        self.pause().await;
        let mut posts: Vec<CommunityPost> = self.load_collection(COMMUNITY_POSTS_KEY).await?;

        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            if let Some(pos) = post.saved_by.iter().position(|id| id == user_id) {
                post.saved_by.remove(pos);
            } else {
                post.saved_by.push(user_id.to_string());
            }
            self.save_collection(COMMUNITY_POSTS_KEY, &posts).await?;
        }
        Ok(posts)
    }

    /// Appends a comment to a post with a generated id and the current time.
    /// Returns the updated feed.
    pub async fn add_comment(
        &self,
        post_id: &str,
        user_id: &str,
        user_name: &str,
        user_avatar: Option<String>,
        text: &str,
    ) -> Result<Vec<CommunityPost>> {
        self.pause().await;
        let mut posts: Vec<CommunityPost> = self.load_collection(COMMUNITY_POSTS_KEY).await?;

        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.comments.push(Comment {
                id: Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                user_name: user_name.to_string(),
                user_avatar,
                text: text.to_string(),
                created_at: Utc::now(),
            });
            self.save_collection(COMMUNITY_POSTS_KEY, &posts).await?;
        }
        Ok(posts)
    }
}
