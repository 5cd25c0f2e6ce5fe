//! Toilets and water fountains.

use anyhow::{anyhow, bail};
use swim_api::SwimClient;
use swim_core::amenity::{RatingForm, Toilet, ToiletDetail, WaterFountain};
use swim_core::directions::Destination;

fn position(record: &impl Destination) -> String {
    record
        .coordinates()
        .map(|c| format!("{:.5},{:.5}", c.lat, c.lon))
        .unwrap_or_else(|| "no coordinates".to_string())
}

pub fn toilet_row(toilet: &Toilet) -> String {
    let facilities: Vec<&str> = toilet
        .facilities()
        .iter()
        .filter(|(_, available)| *available)
        .map(|(label, _)| *label)
        .collect();
    format!(
        "{:<6} {:<32} {:<22} {}",
        toilet.id,
        toilet.display_name(),
        position(toilet),
        facilities.join(", ")
    )
}

pub async fn run_toilets(client: &SwimClient) -> anyhow::Result<()> {
    let toilets = client.toilets().await?;
    log::info!("Fetched {} toilets", toilets.len());
    for toilet in &toilets {
        println!("{}", toilet_row(toilet));
    }
    Ok(())
}

pub fn describe_toilet(detail: &ToiletDetail) -> Vec<String> {
    let toilet = &detail.toilet;
    let mut lines = vec![
        format!("{} ({})", toilet.display_name(), toilet.id),
        format!(
            "Hours: {}",
            toilet.opening_hours.as_deref().unwrap_or("Hours not listed")
        ),
        format!("Average rating: {}", detail.average_label()),
    ];
    for (label, available) in toilet.facilities() {
        if available {
            lines.push(format!("  {}: Available", label));
        }
    }
    if let Ok(url) = toilet.directions_url() {
        lines.push(format!("Directions: {}", url));
    }
    if detail.comments.is_empty() {
        lines.push("No comments yet".to_string());
    }
    for comment in &detail.comments {
        let posted = comment.posted_label().unwrap_or_default();
        lines.push(format!("  \"{}\" {}", comment.comment, posted).trim_end().to_string());
    }
    lines
}

pub async fn run_toilet_detail(client: &SwimClient, id: &str) -> anyhow::Result<()> {
    let detail = client
        .toilet_detail(id)
        .await
        .ok_or_else(|| anyhow!("toilet {} not found", id))?;
    for line in describe_toilet(&detail) {
        println!("{}", line);
    }
    Ok(())
}

pub async fn run_rate_toilet(
    client: &SwimClient,
    id: &str,
    rating: u8,
    clean: bool,
    comment: &str,
) -> anyhow::Result<()> {
    if !(1..=swim_core::amenity::MAX_RATING).contains(&rating) {
        bail!("rating must be between 1 and {}", swim_core::amenity::MAX_RATING);
    }
    let mut form = RatingForm {
        is_clean: Some(clean),
        comment: comment.to_string(),
        ..RatingForm::default()
    };
    form.set_rating(rating);
    let payload = form.build(id)?;

    let outcome = client.submit_toilet_rating(&payload).await;
    if !outcome.success {
        bail!(
            "rating was not accepted: {}",
            outcome.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }
    println!("Thanks! Your rating for toilet {} was submitted.", id);
    Ok(())
}

fn fountain_row(fountain: &WaterFountain) -> String {
    format!("{:<6} {:<32} {}", fountain.id, fountain.display_name(), position(fountain))
}

pub async fn run_fountains(client: &SwimClient, id: Option<&str>) -> anyhow::Result<()> {
    match id {
        Some(id) => {
            let fountain = client
                .water_fountain(id)
                .await?
                .ok_or_else(|| anyhow!("water fountain {} not found", id))?;
            println!("{}", fountain_row(&fountain));
            if let Some(description) = fountain.description.as_deref() {
                println!("{}", description);
            }
            match fountain.directions_url() {
                Ok(url) => println!("Directions: {}", url),
                Err(e) => println!("{}", e),
            }
        }
        None => {
            for fountain in client.water_fountains().await? {
                println!("{}", fountain_row(&fountain));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swim_core::amenity::{ToiletAverage, ToiletComment};

    fn toilet() -> Toilet {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "toilet_name": "Pier Toilet",
            "accessible": true,
            "baby_change": true,
            "lat": -37.85,
            "lon": 144.96
        }))
        .unwrap()
    }

    #[test]
    fn test_toilet_row_lists_available_facilities() {
        let row = toilet_row(&toilet());
        assert!(row.starts_with("3"));
        assert!(row.contains("Pier Toilet"));
        assert!(row.ends_with("Accessible, Baby change"));
    }

    #[test]
    fn test_describe_toilet() {
        let comment = ToiletComment {
            toilet_id: "3".to_string(),
            comment: "Spotless".to_string(),
            rating: Some(5),
            is_clean: Some(true),
            created_at: None,
        };
        let detail = ToiletDetail::new(toilet(), ToiletAverage::unrated("3"), vec![comment]);
        let lines = describe_toilet(&detail);
        assert_eq!(lines[0], "Pier Toilet (3)");
        assert!(lines.contains(&"Average rating: No ratings yet".to_string()));
        assert!(lines.contains(&"  Accessible: Available".to_string()));
        assert!(lines.contains(&"  \"Spotless\"".to_string()));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("Directions: https://www.google.com/maps/dir/?api=1&destination=-37.85,144.96")));
    }
}
