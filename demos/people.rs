use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use autogrid::prelude::*;
use autogrid::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum Role {
    Manager,
    Worker,
    External,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(title = "People")]
struct Person {
    id: Option<u64>,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    date_of_birth: NaiveDate,
    occupation: String,
    important: bool,
    roles: Vec<Role>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let gateway = InMemoryGateway::new().with_rows(seed_people()?)?;
    let mut grid = AutoGrid::for_type::<Person>(gateway)?
        .with_options(UiOptions::default().with_master_percent(60));
    grid.set_collection_display(
        "roles",
        CollectionDisplay::BadgeSuccess,
        Some(Arc::new(|value| {
            value.as_str().unwrap_or_default().to_lowercase()
        })),
    );
    grid.run()
}

fn seed_people() -> Result<Vec<Entity>> {
    let people = vec![
        Person {
            id: None,
            first_name: "Eula".into(),
            last_name: "Lane".into(),
            email: "eula.lane@jigrormo.ye".into(),
            phone: "(762) 526-5961".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1955, 4, 11).unwrap(),
            occupation: "Insurance Clerk".into(),
            important: false,
            roles: vec![Role::Worker],
        },
        Person {
            id: None,
            first_name: "Barry".into(),
            last_name: "Rodriquez".into(),
            email: "barry.rodriquez@zun.mm".into(),
            phone: "(267) 955-5124".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1973, 2, 2).unwrap(),
            occupation: "Mortarman".into(),
            important: true,
            roles: vec![Role::Manager, Role::Worker],
        },
        Person {
            id: None,
            first_name: "Eugenia".into(),
            last_name: "Selvi".into(),
            email: "eugenia.selvi@capfad.vn".into(),
            phone: "(316) 685-6867".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1989, 10, 27).unwrap(),
            occupation: "Air Traffic Controller".into(),
            important: false,
            roles: vec![Role::External],
        },
    ];
    people
        .into_iter()
        .map(|person| Ok(serde_json::to_value(person)?))
        .collect()
}
