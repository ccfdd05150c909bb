use serde::{Deserialize, Serialize};

/// One row of the daily matching report.
///
/// Field names keep the Spanish labels of the report consumed by the liaison
/// office; the serialized form is the report contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReportRowDto {
    /// Approval date, "%Y-%m-%d".
    pub fecha_aprobacion: String,
    /// "{student name} ({application status})".
    pub estudiante: String,
    pub email: String,
    pub empresa: String,
    pub cargo: String,
    /// "SÍ" when the student has any supporting documentation on file.
    pub documentacion_subida: String,
    /// Correlated tutor request status, or "Sin Solicitud".
    pub estado_tutor: String,
    /// Assigned tutor, or "Por Asignar".
    pub nombre_tutor: String,
}
