mod auth_request;
