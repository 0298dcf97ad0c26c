//! Team member queries

use crate::core::models::{Member, MemberStatus};
use crate::utils::error::{AccessError, Result};
use chrono::Utc;
use sea_orm::*;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::entities::{self, team_member};
use super::role_ops;

/// Fields for a new member row
pub struct NewMember {
    /// Normalized (trimmed lowercase) email
    pub email: String,
    pub name: Option<String>,
    pub role_id: Uuid,
    pub invited_by: Option<Uuid>,
}

/// Count all members regardless of status
pub async fn count_members<C: ConnectionTrait>(conn: &C) -> Result<u64> {
    Ok(entities::TeamMember::find().count(conn).await?)
}

/// Find a bare member row
pub async fn find_member_row<C: ConnectionTrait>(
    conn: &C,
    member_id: Uuid,
) -> Result<Option<team_member::Model>> {
    Ok(entities::TeamMember::find_by_id(member_id).one(conn).await?)
}

/// Find a member with its resolved role
pub async fn find_member<C: ConnectionTrait>(conn: &C, member_id: Uuid) -> Result<Option<Member>> {
    let Some(model) = find_member_row(conn, member_id).await? else {
        return Ok(None);
    };

    Ok(Some(assemble(conn, model).await?))
}

/// Find the member bound to a user account
pub async fn find_member_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
) -> Result<Option<Member>> {
    let Some(model) = entities::TeamMember::find()
        .filter(team_member::Column::UserId.eq(user_id))
        .one(conn)
        .await?
    else {
        return Ok(None);
    };

    Ok(Some(assemble(conn, model).await?))
}

/// Find a member row by normalized email, any status
pub async fn find_member_by_email<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<team_member::Model>> {
    Ok(entities::TeamMember::find()
        .filter(team_member::Column::Email.eq(email))
        .one(conn)
        .await?)
}

/// List all members with embedded roles, most recently invited first
pub async fn list_members<C: ConnectionTrait>(conn: &C) -> Result<Vec<Member>> {
    let roles: HashMap<Uuid, _> = role_ops::list_roles(conn)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    let models = entities::TeamMember::find()
        .order_by_desc(team_member::Column::InvitedAt)
        .all(conn)
        .await?;

    models
        .into_iter()
        .map(|model| {
            let role = roles
                .get(&model.role_id)
                .cloned()
                .ok_or_else(|| AccessError::internal("Member references a missing role"))?;
            Ok(model.to_domain_member(role))
        })
        .collect()
}

/// Insert a pending member, returning the assembled member
pub async fn insert_member<C: ConnectionTrait>(conn: &C, new_member: NewMember) -> Result<Member> {
    debug!("Creating member: {}", new_member.email);

    let member_id = Uuid::new_v4();
    let now = Utc::now();

    let model = team_member::ActiveModel {
        id: Set(member_id),
        email: Set(new_member.email),
        name: Set(new_member.name),
        role_id: Set(new_member.role_id),
        status: Set(MemberStatus::Pending.as_str().to_string()),
        invited_by: Set(new_member.invited_by),
        invited_at: Set(now.into()),
        user_id: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(conn)
    .await?;

    assemble(conn, model).await
}

/// Reassign a member's role
pub async fn update_member_role_row<C: ConnectionTrait>(
    conn: &C,
    model: team_member::Model,
    role_id: Uuid,
) -> Result<Member> {
    let mut active: team_member::ActiveModel = model.into();
    active.role_id = Set(role_id);
    active.updated_at = Set(Utc::now().into());

    let model = active.update(conn).await?;
    assemble(conn, model).await
}

/// Refresh the invite timestamp
pub async fn touch_invited_at<C: ConnectionTrait>(
    conn: &C,
    model: team_member::Model,
) -> Result<Member> {
    let now = Utc::now();

    let mut active: team_member::ActiveModel = model.into();
    active.invited_at = Set(now.into());
    active.updated_at = Set(now.into());

    let model = active.update(conn).await?;
    assemble(conn, model).await
}

/// Bind an accepted user account and activate the membership
///
/// Written through by the acceptance flow, which lives outside the
/// authorization engine.
pub async fn bind_accepted_user<C: ConnectionTrait>(
    conn: &C,
    member_id: Uuid,
    user_id: Uuid,
) -> Result<Member> {
    let model = find_member_row(conn, member_id)
        .await?
        .ok_or_else(|| AccessError::not_found("Member not found"))?;

    let mut active: team_member::ActiveModel = model.into();
    active.user_id = Set(Some(user_id));
    active.status = Set(MemberStatus::Active.as_str().to_string());
    active.updated_at = Set(Utc::now().into());

    let model = active.update(conn).await?;
    assemble(conn, model).await
}

/// Delete a member row
pub async fn delete_member_row<C: ConnectionTrait>(conn: &C, member_id: Uuid) -> Result<()> {
    entities::TeamMember::delete_by_id(member_id)
        .exec(conn)
        .await?;
    Ok(())
}

async fn assemble<C: ConnectionTrait>(conn: &C, model: team_member::Model) -> Result<Member> {
    let role = role_ops::find_role(conn, model.role_id)
        .await?
        .ok_or_else(|| AccessError::internal("Member references a missing role"))?;

    Ok(model.to_domain_member(role))
}
