//! Page routes.
//!
//! Real page rendering is out of scope; these handlers are the minimal
//! surfaces the gate protects, and what the black-box tests drive
//! against. They stand where the server-rendered UI would.

use axum::response::{Html, IntoResponse, Redirect, Response};

use membergate_policy::HOME_PATH;

use crate::cookies;

pub async fn home() -> Html<&'static str> {
    Html("<h1>Member portal</h1>")
}

pub async fn login() -> Html<&'static str> {
    Html("<h1>Sign in</h1>")
}

pub async fn signup() -> Html<&'static str> {
    Html("<h1>Sign up</h1>")
}

pub async fn verify() -> Html<&'static str> {
    Html("<h1>Verify your account</h1>")
}

pub async fn legal_terms() -> Html<&'static str> {
    Html("<h1>Terms of service</h1>")
}

pub async fn dashboard() -> Html<&'static str> {
    Html("<h1>Dashboard</h1>")
}

pub async fn admin_home() -> Html<&'static str> {
    Html("<h1>Administration</h1>")
}

/// Clear the session cookie and send the browser home.
pub async fn logout() -> Response {
    let mut response = Redirect::to(HOME_PATH).into_response();
    cookies::append_set_cookie(response.headers_mut(), &cookies::clear_session_cookie());
    response
}
