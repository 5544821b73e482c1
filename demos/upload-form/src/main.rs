use s3_post_policy::{BuildUploadFormOptions, Condition, Config};

const MAX_SIZE: u64 = 10 * 1024 * 1024;

#[derive(serde::Deserialize)]
struct CreateUploadRequestBody {
    size: u64,
    r#type: String,
}

#[derive(serde::Serialize)]
struct CreateUploadResponseBody {
    form_data: Vec<(String, String)>,
    method: String,
    url: String,
}

async fn create_upload(
    axum::extract::State(AppState { config }): axum::extract::State<AppState>,
    axum::extract::Json(CreateUploadRequestBody { size, r#type }): axum::extract::Json<
        CreateUploadRequestBody,
    >,
) -> Result<axum::Json<CreateUploadResponseBody>, axum::http::StatusCode> {
    if size > MAX_SIZE {
        return Err(axum::http::StatusCode::PAYLOAD_TOO_LARGE);
    }
    let bucket_name = config
        .bucket_name()
        .ok_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR)?
        .to_string();
    let content_length_range =
        Condition::content_length_range(size, size).map_err(to_status_code)?;
    let form_data = s3_post_policy::build_upload_form(
        BuildUploadFormOptions {
            // the server picks the object key
            key: format!("uploads/{}", uuid::Uuid::new_v4()),
            key_prefix: "uploads/".to_string(),
            acl: "private".to_string(),
            success_action_status: 201,
            extra_conditions: vec![content_length_range],
            content_type: Some(r#type),
            ..Default::default()
        },
        &config,
    )
    .map_err(to_status_code)?;
    Ok(axum::Json(CreateUploadResponseBody {
        form_data: form_data.into_vec(),
        method: "POST".to_string(),
        url: format!("https://{}.s3.amazonaws.com/", bucket_name),
    }))
}

fn to_status_code(e: s3_post_policy::Error) -> axum::http::StatusCode {
    log::warn!("create upload: {}", e);
    if e.is_validation() {
        axum::http::StatusCode::BAD_REQUEST
    } else {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Clone)]
struct AppState {
    config: Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::from_env()?;
    let router = axum::Router::new()
        .route("/uploads", axum::routing::post(create_upload))
        .with_state(AppState { config });
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
