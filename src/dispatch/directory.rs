//! Accounts, barangays and public contacts.

use serde_json::Value;

use crate::http::{routes, ApiError};
use crate::model::{BarangayList, ContactList, EntityId, UserList};
use crate::store::barangays::BarangaysIntent;
use crate::store::contacts::ContactsIntent;
use crate::store::users::UsersIntent;

use super::{tags, Dispatcher};

impl Dispatcher {
    pub async fn get_all_users(&self) -> Result<UserList, ApiError> {
        let auth = self.auth();
        let query = self.store.select(|s| s.users.filters.to_query());
        self.run(
            tags::GET_ALL_USERS,
            |o| UsersIntent::GetAll(o).into(),
            self.api.get(&routes::USERS, &auth, &query),
        )
        .await
    }

    pub async fn add_user(&self, user: &Value) -> Result<Value, ApiError> {
        let auth = self.auth();
        self.run(
            tags::ADD_USER,
            |o| UsersIntent::Add(o).into(),
            self.api.post(&routes::USERS, &auth, user),
        )
        .await
    }

    pub async fn edit_user(&self, id: &EntityId, changes: &Value) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::user(id);
        self.run(
            tags::EDIT_USER,
            |o| UsersIntent::Edit(o).into(),
            self.api.patch(&path, &auth, changes),
        )
        .await
    }

    pub async fn delete_user(&self, id: &EntityId) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::user(id);
        self.run(
            tags::DELETE_USER,
            |o| UsersIntent::Delete(o).into(),
            self.api.delete(&path, &auth),
        )
        .await
    }

    pub async fn get_all_barangays(&self) -> Result<BarangayList, ApiError> {
        let auth = self.auth();
        self.run(
            tags::GET_ALL_BARANGAYS,
            |o| BarangaysIntent::GetAll(o).into(),
            self.api.get(&routes::BARANGAYS, &auth, &[]),
        )
        .await
    }

    pub async fn get_all_contacts(&self) -> Result<ContactList, ApiError> {
        let auth = self.auth();
        self.run(
            tags::GET_ALL_CONTACTS,
            |o| ContactsIntent::GetAll(o).into(),
            self.api.get(&routes::CONTACTS, &auth, &[]),
        )
        .await
    }
}
