use serde_json::Value;

use crate::http::{routes, ApiError};
use crate::model::LoginResponse;
use crate::store::auth::AuthIntent;
use crate::store::RootIntent;

use super::{tags, Dispatcher};

impl Dispatcher {
    /// Exchange credentials for a session. The body is posted as given.
    pub async fn login(&self, credentials: &Value) -> Result<LoginResponse, ApiError> {
        let auth = self.auth();
        self.run(
            tags::LOGIN,
            |o| AuthIntent::Login(o).into(),
            self.api.post(&routes::AUTH_LOGIN, &auth, credentials),
        )
        .await
    }

    pub fn continue_as_guest(&self) {
        self.store.dispatch(AuthIntent::ContinueAsGuest);
    }

    /// Drop the session and every cached resource.
    pub fn logout(&self) {
        tracing::info!("logging out");
        self.store.dispatch(RootIntent::Logout);
    }
}
