use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::ConfSysError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::RegisterRequest,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_non_blank, validate_password_simple};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 基本字段校验
    if let Err(msg) = validate_non_blank(&register_request.name, "name") {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg))
        );
    }

    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg))
        );
    }

    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg))
        );
    }

    // 2. 角色集合校验（封闭集合，空集合同样拒绝）
    let roles = match UserRole::parse_role_set(&register_request.roles) {
        Ok(roles) => roles,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::RoleSetInvalid, msg)));
        }
    };

    // 3. 检查邮箱是否已存在
    if let Err(response) = check_email_exists(&storage, &register_request.email).await {
        return Ok(response);
    }

    // 4. 哈希密码并创建用户
    match hash_password(&register_request.password) {
        Ok(password_hash) => {
            let create_request = CreateUserRequest {
                name: register_request.name,
                email: register_request.email,
                password: password_hash,
                roles,
                contact_number: register_request.contact_number,
            };

            match storage.create_user(create_request).await {
                Ok(user) => {
                    tracing::info!("New user registered: {}", user.email);
                    Ok(HttpResponse::Created().json(ApiResponse::success(user, "注册成功")))
                }
                // 并发注册同一邮箱时，先查后插的检查会漏掉对方，
                // 由唯一索引兜底并映射为 409
                Err(ConfSysError::Conflict(_)) => {
                    Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                        ErrorCode::EmailAlreadyExists,
                        "Email already exists",
                    )))
                }
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        format!("注册失败: {e}"),
                    )),
                ),
            }
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("密码哈希失败: {e}"),
            )),
        ),
    }
}

async fn check_email_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    email: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_email(email).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EmailAlreadyExists,
            "Email already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support;
    use actix_web::{test, web};
    use std::sync::Arc;

    fn register_body(roles: Vec<String>) -> RegisterRequest {
        RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
            roles,
            contact_number: None,
        }
    }

    // 空角色集合直接拒绝，不落库
    #[actix_web::test]
    async fn test_register_rejects_empty_roles() {
        let storage = test_support::memory_storage().await;
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = test::TestRequest::default()
            .app_data(web::Data::new(storage.clone()))
            .to_http_request();

        let service = AuthService::new_lazy();
        let response = handle_register(&service, register_body(vec![]), &request)
            .await
            .unwrap();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(storage.count_users().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_register_rejects_unknown_role() {
        let storage = test_support::memory_storage().await;
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = test::TestRequest::default()
            .app_data(web::Data::new(storage.clone()))
            .to_http_request();

        let service = AuthService::new_lazy();
        let response = handle_register(
            &service,
            register_body(vec!["admin".to_string()]),
            &request,
        )
        .await
        .unwrap();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(storage.count_users().await.unwrap(), 0);
    }
}
