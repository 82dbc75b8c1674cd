use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::pkg::internal::{
    adaptors::{
        applications::spec::Application,
        jobs::spec::{CreateJobInput, Job},
        profiles::spec::UserProfile,
    },
    auth::User,
    forms::DraftForm,
};

/// Everything one signed-in viewer owns. Nothing here is visible to other sessions.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub jobs: Vec<Job>,
    pub profile: UserProfile,
    pub profile_errors: Vec<String>,
    pub applications: Vec<Application>,
    pub job_form: DraftForm<CreateJobInput>,
}

impl Session {
    pub fn new(user: User) -> Self {
        let profile = user.profile.clone().unwrap_or_default();
        Session {
            user,
            jobs: Vec::new(),
            profile,
            profile_errors: Vec::new(),
            applications: Vec::new(),
            job_form: DraftForm::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self, user: User) -> Uuid {
        let token = Uuid::new_v4();
        tracing::info!("opened session for {} ({})", &user.email, user.role);
        self.sessions.write().await.insert(token, Session::new(user));
        token
    }

    pub async fn get(&self, token: &Uuid) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Runs `f` against the session for `token`, if it is still open.
    pub async fn update<R, F>(&self, token: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut Session) -> R,
    {
        self.sessions.write().await.get_mut(token).map(f)
    }

    pub async fn close(&self, token: &Uuid) -> bool {
        let closed = self.sessions.write().await.remove(token);
        if let Some(s) = &closed {
            tracing::info!("closed session for {}", &s.user.email);
        }
        closed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::{adaptors::profiles::mutators::add_skill, auth::Role};

    #[traced_test]
    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.open(User::new("a@example.com", Role::JobSeeker)).await;
        let b = store.open(User::new("b@example.com", Role::JobSeeker)).await;
        store
            .update(&a, |s| add_skill(&mut s.profile, "Rust"))
            .await;
        assert_eq!(store.get(&a).await.unwrap().profile.skills, vec!["Rust"]);
        assert!(store.get(&b).await.unwrap().profile.skills.is_empty());
    }

    #[traced_test]
    #[tokio::test]
    async fn closed_sessions_are_gone() {
        let store = SessionStore::new();
        let token = store.open(User::new("a@example.com", Role::Employer)).await;
        assert!(store.close(&token).await);
        assert!(!store.close(&token).await);
        assert!(store.get(&token).await.is_none());
        assert!(store.update(&token, |_| ()).await.is_none());
    }
}
