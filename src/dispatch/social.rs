//! Comments and reactions, both scoped to one project.

use serde_json::Value;

use crate::http::{routes, ApiError};
use crate::model::{CommentList, CommentPosted, EntityId, ReactionList};
use crate::store::comments::CommentsIntent;
use crate::store::reactions::ReactionsIntent;

use super::{tags, Dispatcher};

impl Dispatcher {
    pub async fn get_all_comments(&self, project_id: &EntityId) -> Result<CommentList, ApiError> {
        let auth = self.auth();
        let query = self.store.select(|s| s.comments.filters.to_query());
        let path = routes::project_comments(project_id);
        self.run(
            tags::GET_ALL_COMMENTS,
            |o| CommentsIntent::GetAll(o).into(),
            self.api.get(&path, &auth, &query),
        )
        .await
    }

    /// Post a comment, then reload the project's comments.
    pub async fn post_comment(
        &self,
        project_id: &EntityId,
        comment: &Value,
    ) -> Result<CommentPosted, ApiError> {
        let auth = self.auth();
        let path = routes::project_comments(project_id);
        let posted = self
            .run(
                tags::POST_COMMENT,
                |o| CommentsIntent::Post(o).into(),
                self.api.post(&path, &auth, comment),
            )
            .await?;

        self.refetch(tags::GET_ALL_COMMENTS, self.get_all_comments(project_id))
            .await;
        Ok(posted)
    }

    pub async fn get_all_reactions(&self, project_id: &EntityId) -> Result<ReactionList, ApiError> {
        let auth = self.auth();
        let path = routes::project_reactions(project_id);
        self.run(
            tags::GET_ALL_REACTIONS,
            |o| ReactionsIntent::GetAll(o).into(),
            self.api.get(&path, &auth, &[]),
        )
        .await
    }

    /// React to a project, then reload its reactions.
    pub async fn post_reaction(
        &self,
        project_id: &EntityId,
        reaction: &Value,
    ) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::project_reactions(project_id);
        let reacted = self
            .run(
                tags::POST_REACTION,
                |o| ReactionsIntent::React(o).into(),
                self.api.post(&path, &auth, reaction),
            )
            .await?;

        self.refetch(tags::GET_ALL_REACTIONS, self.get_all_reactions(project_id))
            .await;
        Ok(reacted)
    }
}
