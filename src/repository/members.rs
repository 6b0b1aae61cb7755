//! Members register

use indexmap::{map::Entry, IndexMap};

use crate::{error::LibraryError, models::member::Member};

#[derive(Debug, Default)]
pub struct MembersRepository {
    members: IndexMap<String, Member>,
}

impl MembersRepository {
    pub fn get_by_id(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut Member> {
        self.members.get_mut(id)
    }

    /// Append a member; an existing ID is rejected and the stored member kept
    pub fn insert(&mut self, member: Member) -> Result<&Member, LibraryError> {
        match self.members.entry(member.id().to_string()) {
            Entry::Occupied(entry) => Err(LibraryError::DuplicateMember(entry.key().clone())),
            Entry::Vacant(entry) => {
                let member: &Member = entry.insert(member);
                Ok(member)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> + '_ {
        self.members.values()
    }

    pub fn search_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Member> + 'a {
        self.iter()
            .filter(move |member| super::eq_ignore_case(member.name(), name))
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }
}
