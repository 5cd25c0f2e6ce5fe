//! `user` and `remind`: user lookup and visit reminders.

use anyhow::bail;
use swim_api::SwimClient;
use swim_core::planner::PlannerForm;

pub async fn run_user(client: &SwimClient, email: &str) -> anyhow::Result<()> {
    match client.find_user_by_email(email.trim()).await? {
        Some(user) => println!("{} {}", user.id, user.email),
        None => bail!("no user with email {}", email),
    }
    Ok(())
}

pub async fn run_remind(client: &SwimClient, form: &PlannerForm) -> anyhow::Result<()> {
    let visit = form.validate()?;
    let user = client.schedule_visit(&visit).await?;
    println!(
        "Reminder set for {} ({}) to visit {} on {} at {}.",
        user.email,
        user.id,
        visit.place,
        visit.date.format("%-d %b %Y"),
        visit.time.format("%H:%M")
    );
    Ok(())
}
