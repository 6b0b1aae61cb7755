//! Member registration service

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member},
};

use super::SharedLibrary;

#[derive(Clone)]
pub struct MembersService {
    library: SharedLibrary,
}

impl MembersService {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }

    /// Register a new member
    pub async fn register_member(&self, member: CreateMember) -> AppResult<Member> {
        let mut library = self.library.write().await;
        let member = library
            .register_member(member.into())
            .inspect_err(|e| tracing::warn!("Member registration rejected: {}", e))?
            .clone();

        tracing::info!("Member registered: {}", member);
        Ok(member)
    }

    pub async fn search_members(&self, name: &str) -> Vec<Member> {
        self.library.read().await.search_members(name).cloned().collect()
    }

    pub async fn count_members(&self) -> usize {
        self.library.read().await.member_count()
    }

    pub async fn get_member(&self, id: &str) -> AppResult<Member> {
        Ok(self.library.read().await.member(id)?.clone())
    }
}
