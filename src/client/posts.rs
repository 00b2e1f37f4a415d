//! Post lifecycle controller

use reqwest::StatusCode;
use tracing::info;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::Result;
use crate::fixtures;
use crate::oracle::SearchPage;
use crate::types::{NewPost, Post, User};

impl ApiClient {
    /// Create a post with an explicit public/private flag
    ///
    /// Visibility is immutable after creation; edits preserve it.
    pub async fn create_post(&self, author: &User, public: bool) -> Result<Post> {
        let body = NewPost {
            content: fixtures::post_content(),
            picture: None,
            public,
        };

        let client = self.login(&author.context()).await?;
        let response = client
            .post(self.api_url(endpoints::POSTS))
            .json(&body)
            .send()
            .await?;
        let post: Post = self.decode("create post", response).await?;

        info!(
            post_id = post.post_id,
            public,
            author = %author.username,
            "created post"
        );
        Ok(post)
    }

    /// Replace a post's body, preserving its visibility flag
    pub async fn edit_post(&self, actor: &User, post: &Post) -> Result<()> {
        let body = NewPost {
            content: fixtures::post_content(),
            picture: None,
            public: post.public,
        };

        let url = format!("{}?postId={}", self.api_url(endpoints::POSTS), post.post_id);
        let client = self.login(&actor.context()).await?;
        let response = client.put(&url).json(&body).send().await?;
        self.expect_status("edit post", StatusCode::OK, &response)?;

        info!(post_id = post.post_id, "edited post");
        Ok(())
    }

    /// Like a post; returns the updated entity for like-count checks
    pub async fn like_post(&self, actor: &User, post_id: i64) -> Result<Post> {
        let url = format!("{}?postId={}", self.api_url(endpoints::LIKE_POST), post_id);

        let client = self.login(&actor.context()).await?;
        let response = client.post(&url).send().await?;
        self.decode("like post", response).await
    }

    /// Delete a post (author or admin; enforced service-side)
    pub async fn delete_post(&self, actor: &User, post_id: i64) -> Result<()> {
        let url = format!("{}?postId={}", self.api_url(endpoints::POSTS), post_id);

        let client = self.login(&actor.context()).await?;
        let response = client.delete(&url).send().await?;
        self.expect_status("delete post", StatusCode::OK, &response)?;

        info!(post_id, "deleted post");
        Ok(())
    }

    /// The global public listing
    pub async fn find_all_posts(&self) -> Result<Vec<Post>> {
        let response = self
            .anonymous()
            .get(self.api_url(endpoints::POSTS))
            .send()
            .await?;
        self.decode("find all posts", response).await
    }

    /// A user's profile-scoped listing (includes their private posts)
    pub async fn profile_posts(&self, user: &User) -> Result<Vec<Post>> {
        let client = self.login(&user.context()).await?;
        let response = client
            .get(self.api_url(&endpoints::profile_posts(user.id)))
            .json(&SearchPage::single(user.first_name()))
            .send()
            .await?;
        self.decode("profile posts", response).await
    }

    /// Whether a post is present in the applicable listing: the global
    /// listing for public posts, the author's profile listing for private
    /// ones
    pub async fn post_present(&self, author: &User, post: &Post) -> Result<bool> {
        let listing = if post.public {
            self.find_all_posts().await?
        } else {
            self.profile_posts(author).await?
        };
        Ok(listing.iter().any(|p| p.post_id == post.post_id))
    }

    /// Content of a post as the applicable listing currently shows it
    ///
    /// Used after an edit to assert the body actually diverged from the
    /// pre-edit content.
    pub async fn listed_post_content(&self, author: &User, post: &Post) -> Result<Option<String>> {
        let listing = if post.public {
            self.find_all_posts().await?
        } else {
            self.profile_posts(author).await?
        };
        Ok(listing
            .into_iter()
            .find(|p| p.post_id == post.post_id)
            .map(|p| p.content))
    }
}
