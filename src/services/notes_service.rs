//! SeaORM implementation of the NotesService contract
//!
//! All ownership and permission rules live here; the HTTP layer only
//! validates input shape and maps errors to status codes.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{DomainError, NoteSummary, NotesService, UserPayload, UserSummary};
use crate::models::{note, note_editor, user};

pub struct SeaOrmNotesService {
    db: DatabaseConnection,
}

impl SeaOrmNotesService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_user(&self, email: &str) -> Result<user::Model, DomainError> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {}", email)))
    }

    async fn find_owned_note(
        &self,
        owner_id: i32,
        title: &str,
    ) -> Result<Option<note::Model>, DomainError> {
        Ok(note::Entity::find()
            .filter(note::Column::OwnerId.eq(owner_id))
            .filter(note::Column::Title.eq(title))
            .one(&self.db)
            .await?)
    }

    /// Ids of notes the user was granted edit permission on
    async fn granted_note_ids(&self, user_id: i32) -> Result<Vec<i32>, DomainError> {
        let grants = note_editor::Entity::find()
            .filter(note_editor::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;
        Ok(grants.into_iter().map(|g| g.note_id).collect())
    }
}

fn summarize(n: note::Model) -> NoteSummary {
    NoteSummary {
        title: n.title,
        content: n.content,
    }
}

#[async_trait]
impl NotesService for SeaOrmNotesService {
    async fn list_users(&self) -> Result<Vec<UserSummary>, DomainError> {
        let users = user::Entity::find()
            .order_by_asc(user::Column::Email)
            .all(&self.db)
            .await?;
        Ok(users
            .into_iter()
            .map(|u| UserSummary {
                email: u.email,
                name: u.name,
            })
            .collect())
    }

    async fn get_user(&self, email: &str) -> Result<UserSummary, DomainError> {
        let u = self.find_user(email).await?;
        Ok(UserSummary {
            email: u.email,
            name: u.name,
        })
    }

    async fn owned_notes(&self, email: &str) -> Result<Vec<NoteSummary>, DomainError> {
        let owner = self.find_user(email).await?;
        let notes = note::Entity::find()
            .filter(note::Column::OwnerId.eq(owner.id))
            .order_by_asc(note::Column::Title)
            .all(&self.db)
            .await?;
        Ok(notes.into_iter().map(summarize).collect())
    }

    async fn allowed_edit_notes(&self, email: &str) -> Result<Vec<NoteSummary>, DomainError> {
        let u = self.find_user(email).await?;
        let note_ids = self.granted_note_ids(u.id).await?;
        if note_ids.is_empty() {
            return Ok(vec![]);
        }
        let notes = note::Entity::find()
            .filter(note::Column::Id.is_in(note_ids))
            .order_by_asc(note::Column::Title)
            .all(&self.db)
            .await?;
        Ok(notes.into_iter().map(summarize).collect())
    }

    async fn create_note(
        &self,
        email: &str,
        title: &str,
        content: &str,
    ) -> Result<(), DomainError> {
        let owner = self.find_user(email).await?;

        if self.find_owned_note(owner.id, title).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "user {} already owns a note titled '{}'",
                email, title
            )));
        }

        let now = chrono::Utc::now().to_rfc3339();
        let new_note = note::ActiveModel {
            owner_id: Set(owner.id),
            title: Set(title.to_string()),
            content: Set(content.to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };
        new_note.insert(&self.db).await?;

        tracing::info!("note '{}' created for {}", title, email);
        Ok(())
    }

    async fn edit_note(
        &self,
        email: &str,
        title: &str,
        content: &str,
    ) -> Result<(), DomainError> {
        let caller = self.find_user(email).await?;

        // Owned note first, then notes shared with the caller
        let target = match self.find_owned_note(caller.id, title).await? {
            Some(n) => Some(n),
            None => {
                let note_ids = self.granted_note_ids(caller.id).await?;
                if note_ids.is_empty() {
                    None
                } else {
                    note::Entity::find()
                        .filter(note::Column::Id.is_in(note_ids))
                        .filter(note::Column::Title.eq(title))
                        .one(&self.db)
                        .await?
                }
            }
        };

        let target = target.ok_or_else(|| {
            DomainError::NotFound(format!("no editable note titled '{}' for {}", title, email))
        })?;

        let mut active: note::ActiveModel = target.into();
        active.content = Set(content.to_string());
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        active.update(&self.db).await?;

        Ok(())
    }

    async fn create_user(&self, payload: UserPayload) -> Result<(), DomainError> {
        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(payload.email.as_str()))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "user {} already exists",
                payload.email
            )));
        }

        let now = chrono::Utc::now().to_rfc3339();
        let new_user = user::ActiveModel {
            email: Set(payload.email.clone()),
            name: Set(payload.name),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };
        new_user.insert(&self.db).await?;

        tracing::info!("user {} created", payload.email);
        Ok(())
    }

    async fn grant_edit(
        &self,
        owner_email: &str,
        allowed_email: &str,
        title: &str,
    ) -> Result<(), DomainError> {
        let owner = self.find_user(owner_email).await?;
        let target = self.find_owned_note(owner.id, title).await?.ok_or_else(|| {
            DomainError::NotFound(format!("note '{}' owned by {}", title, owner_email))
        })?;
        let grantee = self.find_user(allowed_email).await?;

        if grantee.id == owner.id {
            return Err(DomainError::Validation(
                "cannot grant edit permission to the note's owner".to_string(),
            ));
        }

        // Repeat grants are a no-op
        let existing = note_editor::Entity::find_by_id((target.id, grantee.id))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let grant = note_editor::ActiveModel {
            note_id: Set(target.id),
            user_id: Set(grantee.id),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
        };
        grant.insert(&self.db).await?;

        tracing::info!(
            "{} granted edit on '{}' to {}",
            owner_email,
            title,
            allowed_email
        );
        Ok(())
    }

    async fn delete_note(&self, email: &str, title: &str) -> Result<(), DomainError> {
        let owner = self.find_user(email).await?;
        let target = self
            .find_owned_note(owner.id, title)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("note '{}' owned by {}", title, email)))?;

        // Grants go with the note
        note_editor::Entity::delete_many()
            .filter(note_editor::Column::NoteId.eq(target.id))
            .exec(&self.db)
            .await?;
        target.delete(&self.db).await?;

        tracing::info!("note '{}' of {} deleted", title, email);
        Ok(())
    }
}
