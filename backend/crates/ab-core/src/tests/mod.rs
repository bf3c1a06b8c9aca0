mod auth_credential;
