//! Status transitions for applications and tutor requests.

use entity::enums::ReviewStatus;
use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::tutor::TutorStatusPatchDto,
    server::{
        data::{application::ApplicationRepository, tutor_request::TutorRequestRepository},
        error::{application::ApplicationError, tutor::TutorError, Error},
        util::time,
    },
};

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets an application's review status.
    ///
    /// The approval timestamp is stamped in civil time the first time the
    /// application enters the approved state and never rewritten, so the
    /// daily report keeps its original ordering across later flip-flops.
    pub async fn set_application_status(
        &self,
        application_id: i32,
        status: ReviewStatus,
    ) -> Result<entity::application::Model, Error> {
        let application_repository = ApplicationRepository::new(self.db);

        let application = application_repository
            .get(application_id)
            .await?
            .ok_or(ApplicationError::NotFound(application_id))?;

        let stamp_approval =
            status == ReviewStatus::Aprobado && application.approval_at.is_none();

        let mut active: entity::application::ActiveModel = application.into();
        active.status = Set(status);
        if stamp_approval {
            active.approval_at = Set(Some(time::civil_now()));
        }

        let updated = application_repository.update(active).await?;

        Ok(updated)
    }

    /// Applies the liaison office's patch to a tutor request. Absent fields
    /// are left untouched.
    pub async fn set_tutor_request_status(
        &self,
        request_id: i32,
        patch: TutorStatusPatchDto,
    ) -> Result<entity::tutor_request::Model, Error> {
        let tutor_request_repository = TutorRequestRepository::new(self.db);

        let request = tutor_request_repository
            .get(request_id)
            .await?
            .ok_or(TutorError::NotFound(request_id))?;

        let mut active: entity::tutor_request::ActiveModel = request.into();
        if let Some(status) = patch.status {
            active.status = Set(status);
        }
        if let Some(tutor_name) = patch.tutor_name {
            active.assigned_tutor_name = Set(Some(tutor_name));
        }
        if let Some(tutor_email) = patch.tutor_email {
            active.assigned_tutor_email = Set(Some(tutor_email));
        }

        let updated = tutor_request_repository.update(active).await?;

        Ok(updated)
    }
}
