//! Posts handlers.
//!
//! Presence of body fields is checked here; every business rule lives in
//! `PostService`.

use actix_web::{HttpResponse, web};

use board_core::DomainError;
use board_core::domain::{NewPost, PostChanges, PostId};
use board_shared::ApiResponse;
use board_shared::dto::{CreatePostRequest, DeletePostRequest, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// A body field that must be present and non-empty.
fn required(field: Option<String>) -> AppResult<String> {
    field
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::InvalidInput.into())
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all_posts().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find_post_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost {
        nickname: required(req.nickname)?,
        password: required(req.password)?,
        title: required(req.title)?,
        content: required(req.content)?,
    };

    let created = state.posts.create_post(new_post).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(created)))
}

/// PUT /api/posts/{post_id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let password = required(req.password)?;
    let changes = PostChanges {
        title: required(req.title)?,
        content: required(req.content)?,
    };

    let updated = state
        .posts
        .update_post(path.into_inner(), &password, changes)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated)))
}

/// DELETE /api/posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<DeletePostRequest>,
) -> AppResult<HttpResponse> {
    let password = required(body.into_inner().password)?;

    let deleted = state
        .posts
        .delete_post(path.into_inner(), &password)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(deleted)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{
        App,
        http::{StatusCode, header::ContentType},
        test, web,
    };
    use board_infra::InMemoryPostRepository;
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn state() -> AppState {
        AppState::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn create_body(nickname: &str) -> Value {
        json!({
            "nickname": nickname,
            "password": "1234",
            "title": "Title Test",
            "content": "테스트용 코드입니다."
        })
    }

    #[actix_rt::test]
    async fn create_then_fetch_post() {
        let app = app!(state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(create_body("A"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["postId"], 1);
        assert_eq!(body["data"]["content"], "테스트용 코드입니다.");
        assert!(body["data"].get("password").is_none());

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["nickname"], "A");
        assert!(body["data"].get("password").is_none());
    }

    #[actix_rt::test]
    async fn list_posts_omits_content_newest_first() {
        let app = app!(state());

        for nickname in ["A", "B"] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(create_body(nickname))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let posts = body["data"].as_array().unwrap();
        assert_eq!(posts.len(), 2);
        for post in posts {
            assert!(post.get("content").is_none());
            assert!(post.get("password").is_none());
        }
        let created_at = |post: &Value| {
            chrono::DateTime::parse_from_rfc3339(post["createdAt"].as_str().unwrap()).unwrap()
        };
        assert!(created_at(&posts[0]) >= created_at(&posts[1]));
    }

    #[actix_rt::test]
    async fn create_rejects_missing_fields() {
        let app = app!(state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "nickname": "A", "password": "1234", "title": "" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Params가 유효하지 않습니다.");
    }

    #[actix_rt::test]
    async fn create_rejects_malformed_json() {
        let app = app!(state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(ContentType::json())
            .set_payload(r#"{"nickname": "A", "password": "#)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Params가 유효하지 않습니다.");
    }

    #[actix_rt::test]
    async fn update_rejects_empty_title_before_lookup() {
        let app = app!(state());
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(create_body("A"))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({ "password": "1234", "title": "", "content": "Fresh" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Params가 유효하지 않습니다.");

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "Title Test");
    }

    #[actix_rt::test]
    async fn delete_rejects_missing_body() {
        let app = app!(state());
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(create_body("A"))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Params가 유효하지 않습니다.");

        let req = test::TestRequest::delete()
            .uri("/api/posts/1")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn non_numeric_post_id_is_not_found() {
        let app = app!(state());

        let req = test::TestRequest::get().uri("/api/posts/abc").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn update_requires_matching_password() {
        let app = app!(state());
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(create_body("A"))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({ "password": "wrong", "title": "New", "content": "Fresh" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "비밀번호가 일치하지 않습니다.");

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({ "password": "1234", "title": "New", "content": "Fresh" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["title"], "New");
        assert_eq!(body["data"]["content"], "Fresh");
    }

    #[actix_rt::test]
    async fn delete_returns_snapshot_then_post_is_gone() {
        let app = app!(state());
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(create_body("A"))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete()
            .uri("/api/posts/1")
            .set_json(json!({ "password": "1234" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["postId"], 1);
        assert!(body["data"].get("password").is_none());

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "존재하지 않는 게시글입니다.");
    }

    #[actix_rt::test]
    async fn delete_unknown_post_is_not_found() {
        let app = app!(state());

        let req = test::TestRequest::delete()
            .uri("/api/posts/123123")
            .set_json(json!({ "password": "1234" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
