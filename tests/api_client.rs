#![cfg(feature = "native")]

//! REST client against an in-process mock backend

use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use dreamworks_panel::client::ApiClient;
use dreamworks_panel::panel::{
    save_character, sign_out, CharacterForm, CharactersPage, Redirect, ToastLog,
};
use dreamworks_panel::services::Backend;
use dreamworks_panel::{
    ApiError, AuthApi, Character, CharacterApi, CreateCharacterDto, DashboardApi, EntityId,
    FileUpload, FranchiseApi, GameModeApi, GameModeDto, ImageUpdate, LoginRequest,
    UpdateCharacterDto,
};

#[derive(Debug, Clone, Default)]
struct Recorded {
    method: String,
    path: String,
    content_type: String,
    cookie: Option<String>,
    fields: BTreeMap<String, String>,
    files: Vec<String>,
    json: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

fn record(log: &Log, method: &Method, uri: &Uri, headers: &HeaderMap) -> usize {
    let get_header = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let mut log = log.lock().unwrap();
    log.push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type: get_header(header::CONTENT_TYPE).unwrap_or_default(),
        cookie: get_header(header::COOKIE),
        ..Recorded::default()
    });
    log.len() - 1
}

fn character_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "emojis": [],
        "gender": "MALE",
        "race": [],
        "ethnicity": [],
        "hair": "",
        "aliveStatus": "ALIVE",
        "isProtagonist": false,
        "isAntagonist": false,
        "franchiseId": "1"
    })
}

fn user_json() -> Value {
    json!({
        "id": "u1",
        "email": "admin@dreamworks.com",
        "role": "ADMIN",
        "status": "ACTIVE"
    })
}

async fn list_or_show(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&log, &method, &uri, &headers);
    match uri.path() {
        "/characters" => Json(json!([character_json(1, "Burro")])).into_response(),
        "/franchises" => Json(json!([{ "id": 1, "name": "Shrek" }])).into_response(),
        "/game-mode" => {
            Json(json!([{ "id": 1, "name": "EMOJI", "isActive": true }])).into_response()
        }
        "/admin/dashboard/kpis" => Json(json!({
            "totalUsers": 120,
            "dailyGames": 30,
            "successRate": { "EMOJI": 0.62 }
        }))
        .into_response(),
        path if path.starts_with("/franchises/") => (
            StatusCode::NOT_FOUND,
            Json(json!({ "statusCode": 404, "message": ["Franquia não encontrada", "id inválido"] })),
        )
            .into_response(),
        _ => Json(character_json(7, "Fiona")).into_response(),
    }
}

async fn multipart_body(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let index = record(&log, &method, &uri, &headers);

    let mut fields = BTreeMap::new();
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let bytes = field.bytes().await.unwrap();
                files.push(format!("{}:{}:{}", name, file_name, bytes.len()));
            }
            None => {
                fields.insert(name, field.text().await.unwrap());
            }
        }
    }

    let name = fields.get("name").cloned().unwrap_or_else(|| "Fiona".into());
    {
        let mut log = log.lock().unwrap();
        log[index].fields = fields;
        log[index].files = files;
    }

    if uri.path().starts_with("/franchises") {
        Json(json!({ "id": 9, "name": name })).into_response()
    } else {
        Json(character_json(42, &name)).into_response()
    }
}

async fn json_body(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let index = record(&log, &method, &uri, &headers);
    log.lock().unwrap()[index].json = Some(body.clone());

    if uri.path().starts_with("/game-mode") {
        Json(json!({ "id": 5, "name": body["name"], "isActive": body["isActive"] }))
            .into_response()
    } else if uri.path().starts_with("/franchises") {
        Json(json!({ "id": 1, "name": body["name"] })).into_response()
    } else {
        Json(character_json(7, body["name"].as_str().unwrap_or("Fiona"))).into_response()
    }
}

async fn delete_entity(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&log, &method, &uri, &headers);
    if uri.path().starts_with("/characters") {
        Json(character_json(7, "Fiona")).into_response()
    } else if uri.path().starts_with("/game-mode") {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::OK.into_response()
    }
}

async fn login(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let index = record(&log, &method, &uri, &headers);
    log.lock().unwrap()[index].json = Some(body.clone());

    if body["password"] != "shrek123" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Credenciais inválidas" })),
        )
            .into_response();
    }

    (
        [(header::SET_COOKIE, "session=abc; Path=/; HttpOnly")],
        Json(json!({ "token": "jwt", "user": user_json() })),
    )
        .into_response()
}

async fn profile(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&log, &method, &uri, &headers);
    let signed_in = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |c| c.contains("session=abc"));

    if signed_in {
        Json(user_json()).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Unauthorized" }))).into_response()
    }
}

async fn logout(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&log, &method, &uri, &headers);
    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
}

/// Start the mock backend and return its base URL with the request log
async fn spawn_backend() -> (String, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/characters", get(list_or_show).post(multipart_body))
        .route(
            "/characters/:id",
            get(list_or_show).patch(json_body).delete(delete_entity),
        )
        .route(
            "/characters/:id/image",
            patch(multipart_body).delete(list_or_show),
        )
        .route("/franchises", get(list_or_show).post(multipart_body))
        .route(
            "/franchises/:id",
            get(list_or_show).patch(json_body).delete(delete_entity),
        )
        .route("/franchises/:id/image", patch(multipart_body))
        .route("/game-mode", get(list_or_show).post(json_body))
        .route("/game-mode/:id", patch(json_body).delete(delete_entity))
        .route("/auth/login", post(login))
        .route("/auth/profile", get(profile))
        .route("/auth/logout", post(logout))
        .route("/admin/dashboard/kpis", get(list_or_show))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), log)
}

fn requests(log: &Log) -> Vec<Recorded> {
    log.lock().unwrap().clone()
}

#[tokio::test]
async fn test_character_create_is_multipart() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    let dto = CreateCharacterDto {
        name: "Shrek".into(),
        emojis: Some(vec![]),
        race: Some(vec!["ogro".into()]),
        franchise_ids: Some(vec!["1".into()]),
        ..CreateCharacterDto::default()
    };
    let file = FileUpload::new("shrek.png", vec![1, 2, 3]);
    let created = backend.characters.create(&dto, Some(&file)).await.unwrap();
    assert_eq!(created.id, EntityId::from(42u64));
    assert_eq!(created.name, "Shrek");

    let req = &requests(&log)[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/characters");
    assert!(req.content_type.starts_with("multipart/form-data"));
    assert_eq!(req.fields["emojis"], "[]");
    assert_eq!(req.fields["race"], r#"["ogro"]"#);
    assert_eq!(req.fields["franchiseIds"], r#"["1"]"#);
    assert_eq!(req.fields["isProtagonist"], "false");
    assert_eq!(req.fields["gender"], "MALE");
    assert!(!req.fields.contains_key("ethnicity"));
    assert!(!req.fields.contains_key("hair"));
    assert_eq!(req.files, vec!["file:shrek.png:3"]);
}

#[tokio::test]
async fn test_character_update_is_json() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    let dto = UpdateCharacterDto {
        name: Some("Fiona".into()),
        is_protagonist: Some(true),
        ..UpdateCharacterDto::default()
    };
    backend
        .characters
        .update(&EntityId::from(7u64), &dto)
        .await
        .unwrap();

    let req = &requests(&log)[0];
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/characters/7");
    assert!(req.content_type.starts_with("application/json"));
    let body = req.json.as_ref().unwrap();
    assert_eq!(body["name"], "Fiona");
    assert_eq!(body["isProtagonist"], true);
    assert!(body.get("hair").is_none());
}

#[tokio::test]
async fn test_character_edit_sends_cleared_hair() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    let fiona: Character = serde_json::from_value(json!({
        "id": 7,
        "name": "Fiona",
        "hair": "Ruivo",
        "franchiseId": "1"
    }))
    .unwrap();
    let mut form = CharacterForm::from_character(&fiona);
    form.hair.clear();

    save_character(&backend.characters, &form, Some(&fiona.id))
        .await
        .unwrap();

    let req = &requests(&log)[0];
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/characters/7");
    assert!(req.content_type.starts_with("application/json"));
    let body = req.json.as_ref().unwrap();
    assert_eq!(body["hair"], "");
    assert_eq!(body["name"], "Fiona");
}

#[tokio::test]
async fn test_image_update_field_names() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());
    let id = EntityId::from(7u64);

    backend
        .characters
        .update_image(&id, &ImageUpdate::url("https://res.cloudinary.com/f.png"))
        .await
        .unwrap();
    backend
        .franchises
        .update_image(&id, &ImageUpdate::file(FileUpload::new("cover.jpg", vec![9])))
        .await
        .unwrap();
    backend.characters.delete_image(&id).await.unwrap();

    let reqs = requests(&log);
    assert_eq!(reqs[0].path, "/characters/7/image");
    assert_eq!(reqs[0].fields["imageUrl1"], "https://res.cloudinary.com/f.png");
    assert!(reqs[0].files.is_empty());

    assert_eq!(reqs[1].path, "/franchises/7/image");
    assert_eq!(reqs[1].files, vec!["file:cover.jpg:1"]);
    assert!(!reqs[1].fields.contains_key("imageUrl"));

    assert_eq!(reqs[2].method, "DELETE");
    assert_eq!(reqs[2].path, "/characters/7/image");
}

#[tokio::test]
async fn test_deletes_without_body() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    backend.franchises.remove(&EntityId::new("3")).await.unwrap();
    backend.game_modes.remove(&EntityId::new("4")).await.unwrap();
    let removed = backend.characters.remove(&EntityId::new("7")).await.unwrap();
    assert_eq!(removed.name, "Fiona");

    let paths: Vec<String> = requests(&log).into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/franchises/3", "/game-mode/4", "/characters/7"]);
}

#[tokio::test]
async fn test_game_mode_json_roundtrip() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    let dto = GameModeDto {
        name: "IMAGE".into(),
        description: "Adivinhe pela imagem".into(),
        is_active: false,
    };
    let mode = backend.game_modes.create(&dto).await.unwrap();
    assert!(!mode.is_active);

    let req = &requests(&log)[0];
    assert_eq!(req.path, "/game-mode");
    assert_eq!(req.json.as_ref().unwrap()["isActive"], false);
}

#[tokio::test]
async fn test_error_message_is_extracted() {
    let (url, _log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    let err = backend
        .franchises
        .get_by_id(&EntityId::new("99"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.server_message(),
        Some("Franquia não encontrada; id inválido")
    );
}

#[tokio::test]
async fn test_ids_are_percent_encoded() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    backend
        .characters
        .get_by_id(&EntityId::new("a b"))
        .await
        .unwrap();
    assert_eq!(requests(&log)[0].path, "/characters/a%20b");
}

#[tokio::test]
async fn test_login_session_cookie() {
    let (url, log) = spawn_backend().await;
    let client = ApiClient::new(&url).unwrap();
    let backend = Backend::new(client.clone());

    let err = backend.auth.profile().await.unwrap_err();
    assert!(err.is_unauthorized());

    let response = backend
        .auth
        .login(&LoginRequest {
            email: "admin@dreamworks.com".into(),
            password: "shrek123".into(),
        })
        .await
        .unwrap();
    assert!(response.user.is_admin());

    let user = backend.auth.profile().await.unwrap();
    assert_eq!(user.email, "admin@dreamworks.com");
    assert!(requests(&log)[2]
        .cookie
        .as_deref()
        .unwrap()
        .contains("session=abc"));

    // A new client seeded from the saved header shares the session
    let saved = client.cookie_header().unwrap();
    let restored = Backend::new(ApiClient::with_cookies(&url, Some(&saved)).unwrap());
    assert!(restored.auth.profile().await.is_ok());
}

#[tokio::test]
async fn test_bad_login_message() {
    let (url, _log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    let err = backend
        .auth
        .login(&LoginRequest {
            email: "admin@dreamworks.com".into(),
            password: "errada".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.server_message(), Some("Credenciais inválidas"));
}

#[tokio::test]
async fn test_logout_failure_still_redirects() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    assert!(backend.auth.logout().await.is_err());
    assert_eq!(sign_out(&backend.auth).await, Redirect("/"));
    assert_eq!(requests(&log).len(), 2);
}

#[tokio::test]
async fn test_kpis_decode() {
    let (url, _log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());

    let kpi = backend.dashboard.kpis().await.unwrap();
    assert_eq!(kpi.total_users, 120);
    assert_eq!(kpi.active_users, 0);
    assert_eq!(kpi.success_rate["EMOJI"], 0.62);
}

#[tokio::test]
async fn test_characters_page_over_http() {
    let (url, log) = spawn_backend().await;
    let backend = Backend::new(ApiClient::new(&url).unwrap());
    let toasts = ToastLog::new();

    let mut page = CharactersPage::new(&backend.characters, &backend.franchises, &toasts);
    page.mount().await;
    assert_eq!(page.list.items().len(), 1);
    assert_eq!(page.franchise_options[0].name, "Shrek");
    log.lock().unwrap().clear();

    page.open_create();
    page.form.name = "Shrek".into();
    page.form.franchise_id = "1".into();
    assert!(page.submit().await);

    let reqs = requests(&log);
    assert_eq!(reqs.len(), 2);
    assert_eq!((reqs[0].method.as_str(), reqs[0].path.as_str()), ("POST", "/characters"));
    assert_eq!(reqs[0].fields["emojis"], "[]");
    assert_eq!(reqs[0].fields["race"], "[]");
    assert_eq!(reqs[0].fields["ethnicity"], "[]");
    assert_eq!((reqs[1].method.as_str(), reqs[1].path.as_str()), ("GET", "/characters"));
    assert_eq!(toasts.last().unwrap().message, "Criado!");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = Backend::new(ApiClient::new(&format!("http://{}", addr)).unwrap());
    let err = backend.game_modes.get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
