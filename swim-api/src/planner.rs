use crate::client::SwimClient;
use crate::error::ApiError;
use swim_core::planner::{PlannedVisit, User};

impl SwimClient {
    /// Register a visit reminder, creating the user on first use.
    ///
    /// Returns the user the reminder was filed under.
    pub async fn schedule_visit(&self, visit: &PlannedVisit) -> Result<User, ApiError> {
        let user = match self.find_user_by_email(&visit.email).await? {
            Some(user) => user,
            None => {
                log::info!("No user for {}, creating one", visit.email);
                self.create_user(&visit.email).await?
            }
        };
        self.create_notification(&visit.notification_for(&user)).await?;
        log::info!("Reminder for {} at {} {} registered", visit.place, visit.date, visit.time);
        Ok(user)
    }
}
