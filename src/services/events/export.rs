//! 已接收论文报表导出服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook};
use tracing::error;

use super::EventService;
use crate::models::papers::entities::PaperStatus;
use crate::models::papers::responses::PaperDetail;
use crate::models::{ApiResponse, ErrorCode};

/// 导出活动下已接收论文的 XLSX 报表
pub async fn handle_export_accepted(
    service: &EventService,
    request: &HttpRequest,
    event_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取活动信息
    let event = match storage.get_event_by_id(event_id).await {
        Ok(Some(e)) => e,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::NotFound, "活动不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询活动失败: {e}"),
                )),
            );
        }
    };

    // 获取该活动下全部已接收论文
    let papers = match storage
        .list_papers_by_event(event_id, Some(PaperStatus::Accepted))
        .await
    {
        Ok(papers) => papers,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询论文失败: {e}"),
                )),
            );
        }
    };

    match generate_xlsx(&event.title, &papers) {
        Ok(buffer) => {
            let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
            let filename = format!("event_{event_id}_accepted_{timestamp}.xlsx");

            Ok(HttpResponse::Ok()
                .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(buffer))
        }
        Err(e) => {
            error!("生成 XLSX 失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    format!("生成报表失败: {e}"),
                )),
            )
        }
    }
}

/// 生成 XLSX 文件
fn generate_xlsx(event_title: &str, papers: &[PaperDetail]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new().set_bold();
    let title_format = Format::new().set_bold().set_font_size(14);

    let sheet = workbook
        .add_worksheet()
        .set_name("Accepted Papers")
        .map_err(|e| e.to_string())?;

    sheet
        .write_string_with_format(0, 0, format!("{event_title} - Accepted Papers"), &title_format)
        .map_err(|e| e.to_string())?;

    let headers = [
        "S.No",
        "Paper Title",
        "Track",
        "Author Name",
        "Author Email",
        "Contact Number",
        "Event",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(2, col as u16, *header, &header_format)
            .map_err(|e| e.to_string())?;
    }

    for (idx, detail) in papers.iter().enumerate() {
        let row = 3 + idx as u32;

        let (author_name, author_email, contact_number) = match &detail.author {
            Some(author) => (
                author.name.clone(),
                author.email.clone(),
                author.contact_number.clone().unwrap_or_else(|| "N/A".into()),
            ),
            None => ("N/A".into(), "N/A".into(), "N/A".into()),
        };

        sheet
            .write_number(row, 0, (idx + 1) as f64)
            .map_err(|e| e.to_string())?;
        sheet
            .write_string(row, 1, &detail.paper.title)
            .map_err(|e| e.to_string())?;
        sheet
            .write_string(row, 2, &detail.paper.track)
            .map_err(|e| e.to_string())?;
        sheet
            .write_string(row, 3, author_name)
            .map_err(|e| e.to_string())?;
        sheet
            .write_string(row, 4, author_email)
            .map_err(|e| e.to_string())?;
        sheet
            .write_string(row, 5, contact_number)
            .map_err(|e| e.to_string())?;
        sheet
            .write_string(row, 6, event_title)
            .map_err(|e| e.to_string())?;
    }

    // 列宽
    sheet.set_column_width(1, 40).map_err(|e| e.to_string())?;
    sheet.set_column_width(2, 18).map_err(|e| e.to_string())?;
    sheet.set_column_width(3, 22).map_err(|e| e.to_string())?;
    sheet.set_column_width(4, 28).map_err(|e| e.to_string())?;
    sheet.set_column_width(5, 18).map_err(|e| e.to_string())?;
    sheet.set_column_width(6, 28).map_err(|e| e.to_string())?;

    workbook.save_to_buffer().map_err(|e| e.to_string())
}
