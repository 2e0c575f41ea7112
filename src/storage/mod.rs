//! The only component that talks to Postgres. Handlers never issue raw
//! queries; they go through [`Storage`], which is constructed once in main
//! and cloned into the router state (the pool is the shared handle).
//!
//! Updates are a single conditional `UPDATE ... COALESCE ... RETURNING`
//! statement, so a partial update is atomic and cannot lose a concurrent
//! writer's fields the way a read-merge-write sequence would.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::announcement::{Announcement, AnnouncementPatch, NewAnnouncement};
use crate::models::event::{Event, EventPatch, NewEvent};
use crate::models::message::{Message, NewMessage};
use crate::models::registration::{NewRegistration, Registration, RegistrationPatch};
use crate::models::team_member::{NewTeamMember, TeamMember, TeamMemberPatch};
use crate::models::user::{NewUser, User};

#[derive(Clone)]
pub struct Storage {
    pool: PgPool,
}

impl Storage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =================== Events ===================

    pub async fn events(&self) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn event(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_event(&self, new: &NewEvent) -> Result<Event, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (title, description, date, location, image, registration_link)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.date)
        .bind(&new.location)
        .bind(&new.image)
        .bind(&new.registration_link)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_event(
        &self,
        id: Uuid,
        patch: &EventPatch,
    ) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                date = COALESCE($4, date),
                location = COALESCE($5, location),
                image = COALESCE($6, image),
                registration_link = COALESCE($7, registration_link),
                updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.date)
        .bind(&patch.location)
        .bind(&patch.image)
        .bind(&patch.registration_link)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // =================== Team members ===================

    pub async fn team_members(&self) -> Result<Vec<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members ORDER BY \"order\", created_at",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn team_member(&self, id: Uuid) -> Result<Option<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_team_member(
        &self,
        new: &NewTeamMember,
    ) -> Result<TeamMember, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            "INSERT INTO team_members (name, role, bio, image, social_links, \"order\")
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.role)
        .bind(&new.bio)
        .bind(&new.image)
        .bind(&new.social_links)
        .bind(new.order)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_team_member(
        &self,
        id: Uuid,
        patch: &TeamMemberPatch,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            "UPDATE team_members SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                bio = COALESCE($4, bio),
                image = COALESCE($5, image),
                social_links = COALESCE($6, social_links),
                \"order\" = COALESCE($7, \"order\"),
                updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.role)
        .bind(&patch.bio)
        .bind(&patch.image)
        .bind(&patch.social_links)
        .bind(patch.order)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_team_member(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // =================== Announcements ===================

    pub async fn announcements(&self) -> Result<Vec<Announcement>, sqlx::Error> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn announcement(&self, id: Uuid) -> Result<Option<Announcement>, sqlx::Error> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_announcement(
        &self,
        new: &NewAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (title, content, \"type\", date)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&new.title)
        .bind(&new.content)
        .bind(&new.kind)
        .bind(&new.date)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_announcement(
        &self,
        id: Uuid,
        patch: &AnnouncementPatch,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        sqlx::query_as::<_, Announcement>(
            "UPDATE announcements SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                \"type\" = COALESCE($4, \"type\"),
                date = COALESCE($5, date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.content)
        .bind(&patch.kind)
        .bind(&patch.date)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_announcement(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // =================== Registrations ===================

    pub async fn registrations(&self) -> Result<Vec<Registration>, sqlx::Error> {
        sqlx::query_as::<_, Registration>("SELECT * FROM registrations ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn registration(&self, id: Uuid) -> Result<Option<Registration>, sqlx::Error> {
        sqlx::query_as::<_, Registration>("SELECT * FROM registrations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// `event_title` comes in separately: the handler has already applied
    /// the business rule, so storage always receives a non-blank title.
    pub async fn create_registration(
        &self,
        event_title: &str,
        new: &NewRegistration,
    ) -> Result<Registration, sqlx::Error> {
        sqlx::query_as::<_, Registration>(
            "INSERT INTO registrations (event_title, name, roll_no, email, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(event_title)
        .bind(&new.name)
        .bind(&new.roll_no)
        .bind(&new.email)
        .bind(&new.phone)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_registration(
        &self,
        id: Uuid,
        patch: &RegistrationPatch,
    ) -> Result<Option<Registration>, sqlx::Error> {
        sqlx::query_as::<_, Registration>(
            "UPDATE registrations SET
                event_title = COALESCE($2, event_title),
                name = COALESCE($3, name),
                roll_no = COALESCE($4, roll_no),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&patch.event_title)
        .bind(&patch.name)
        .bind(&patch.roll_no)
        .bind(&patch.email)
        .bind(&patch.phone)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_registration(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // =================== Contact messages ===================

    pub async fn messages(&self) -> Result<Vec<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn message(&self, id: Uuid) -> Result<Option<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_message(&self, new: &NewMessage) -> Result<Message, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await
    }

    /// Single-field update; absent id reports the same way as `update`.
    pub async fn mark_message_read(&self, id: Uuid) -> Result<Option<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            "UPDATE messages SET is_read = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_message(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // =================== Users ===================

    pub async fn user(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn user_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fails with a unique-violation database error on a duplicate
    /// username.
    pub async fn create_user(&self, new: &NewUser) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(&new.username)
        .bind(&new.password)
        .fetch_one(&self.pool)
        .await
    }
}
