//! HTTP routes.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | [`index`] — every tweet and user |
//! | GET | `/tweet` | [`compose`] — composition page, or redirect to `/login` |
//! | POST | `/tweet` | [`post_tweet`] — create a tweet owned by the session user |
//! | GET | `/signup`, `/users` | [`users`] — sign-up form and user list |
//! | POST | `/sign-up` | [`sign_up`] — create a user |
//! | GET | `/login` | [`login_form`] |
//! | POST | `/login` | [`login`] — assert an identity by username |
//! | GET | `/logout` | [`logout`] — destroy the session |
//!
//! Domain failures are answered with redirects, never with error statuses. Only
//! store or session infrastructure errors become a `500` through [`AppError`].

use api::{auth::AuthSession, AppError, AppState};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use store::{NewTweet, NewUser, StoreError};

/// Build the application router with its state applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tweet", get(compose).post(post_tweet))
        .route("/signup", get(users))
        .route("/users", get(users))
        .route("/sign-up", post(sign_up))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TweetForm {
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SignUpForm {
    username: String,
    email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginForm {
    username: String,
}

async fn index(State(state): State<AppState>, auth: AuthSession) -> Result<Html<String>, AppError> {
    let viewer = auth.current_user(state.store.as_ref()).await?;
    let tweets = state.store.all_tweets().await?;
    let users = state.store.all_users().await?;

    Ok(Html(ui::home_page(viewer, tweets, users)))
}

async fn compose(State(state): State<AppState>, auth: AuthSession) -> Result<Response, AppError> {
    if !auth.logged_in().await? {
        return Ok(Redirect::to("/login").into_response());
    }

    let Some(user) = auth.current_user(state.store.as_ref()).await? else {
        tracing::warn!("Session refers to a missing user, logging out");
        auth.log_out().await?;
        return Ok(Redirect::to("/login").into_response());
    };

    let tweets = state.store.tweets_by_user(user.id).await?;
    Ok(Html(ui::compose_page(user, tweets)).into_response())
}

async fn post_tweet(
    State(state): State<AppState>,
    auth: AuthSession,
    Form(form): Form<TweetForm>,
) -> Result<Redirect, AppError> {
    // A tweet is never stored without an owner
    let Some(user) = auth.current_user(state.store.as_ref()).await? else {
        auth.log_out().await?;
        return Ok(Redirect::to("/login"));
    };

    let tweet = match NewTweet::new(&user, &form.status) {
        Ok(tweet) => tweet,
        Err(e) => {
            tracing::warn!("Rejected tweet from {}: {}", user.username, e);
            return Ok(Redirect::to("/tweet"));
        }
    };

    match state.store.create_tweet(tweet).await {
        Ok(tweet) => {
            tracing::info!(tweet_id = tweet.id, user_id = user.id, "Tweet posted");
            Ok(Redirect::to("/"))
        }
        Err(StoreError::UnknownUser(id)) => {
            tracing::warn!("User {} vanished before posting, logging out", id);
            auth.log_out().await?;
            Ok(Redirect::to("/login"))
        }
        Err(e) => Err(e.into()),
    }
}

async fn users(State(state): State<AppState>, auth: AuthSession) -> Result<Html<String>, AppError> {
    let viewer = auth.current_user(state.store.as_ref()).await?;
    let users = state.store.all_users().await?;

    Ok(Html(ui::users_page(viewer, users)))
}

async fn sign_up(
    State(state): State<AppState>,
    Form(form): Form<SignUpForm>,
) -> Result<Redirect, AppError> {
    let user = match NewUser::new(&form.username, &form.email) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Rejected sign-up: {}", e);
            return Ok(Redirect::to("/signup"));
        }
    };

    match state.store.create_user(user).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "Signed up {}", user.username);
            Ok(Redirect::to("/"))
        }
        Err(StoreError::DuplicateUsername(name)) => {
            tracing::warn!("Rejected sign-up: username {} is taken", name);
            Ok(Redirect::to("/signup"))
        }
        Err(e) => Err(e.into()),
    }
}

async fn login_form() -> Html<String> {
    Html(ui::login_page())
}

async fn login(
    State(state): State<AppState>,
    auth: AuthSession,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let Some(user) = state.store.find_user_by_username(form.username.trim()).await? else {
        return Ok(Redirect::to("/signup"));
    };

    auth.log_in(&user).await?;
    tracing::info!(user_id = user.id, "Logged in {}", user.username);
    Ok(Redirect::to("/"))
}

async fn logout(auth: AuthSession) -> Result<Redirect, AppError> {
    auth.log_out().await?;
    Ok(Redirect::to("/login"))
}
