//! Startup seeding and additive schema migration.
//!
//! Both run once at process start, before any handler executes. Seeding
//! creates missing files (header-only, plus a seed row where the rest of
//! the system depends on one existing). Migration brings files written by
//! older deployments up to the current column set: it only ever adds
//! columns with fixed defaults, never removes, renames, or validates
//! anything, and running it twice produces no further change.
//!
//! Migration is best-effort by policy: a malformed table is reported as a
//! warning and skipped, because losing access to every record over one bad
//! column is worse than limping forward.

use crate::config::AppConfig;
use crate::errors::Result;
use crate::store::{Entity, RecordStore, Table};
use chrono::Local;
use tracing::{info, warn};

/// Columns required by the current schema, with the default back-filled
/// into rows that predate each column. Applied in order.
const fn required_columns(entity: Entity) -> &'static [(&'static str, &'static str)] {
    match entity {
        Entity::Livestock => &[
            ("id", "0"),
            ("tag", ""),
            ("category", "Cow"),
            ("weight_kg", "0"),
            ("purchase_cost", "0"),
            ("entry_date", "1970-01-01"),
            ("pasture", ""),
            ("status", "Active"),
            ("exit_date", ""),
            ("exit_reason", ""),
            ("sale_value", ""),
        ],
        Entity::Pastures => &[("name", ""), ("area_ha", "0"), ("forage_type", "")],
        Entity::Checklist => &[
            ("date", "1970-01-01"),
            ("responsible", ""),
            ("salt", "false"),
            ("water", "false"),
            ("fence", "false"),
            ("notes", ""),
        ],
        Entity::Staff => &[
            ("id", "0"),
            ("name", ""),
            ("role", "Operational"),
            ("function", ""),
            ("phone", ""),
            ("status", "Active"),
        ],
        Entity::Market => &[
            ("date", "1970-01-01"),
            ("cattle_price_per_unit", "0"),
            ("calf_price_per_head", "0"),
            ("feed_price", "0"),
        ],
        Entity::DayLabor => &[
            ("date", "1970-01-01"),
            ("worker_name", ""),
            ("service", ""),
            ("daily_rate", "0"),
            ("days_worked", "0"),
            ("total_paid", "0"),
            ("notes", ""),
        ],
    }
}

/// Creates any missing entity file.
///
/// Most files start header-only; three get a seed row: the market table
/// (so a "latest quote" lookup always has a row to return), the pasture
/// register (intake forms need at least one pasture to reference), and the
/// staff roster (the configured owner, with the Owner role).
pub fn seed(store: &RecordStore, config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(&store.config().data_dir)?;

    for entity in Entity::ALL {
        let path = store.config().path_for(entity);
        if path.exists() {
            continue;
        }

        let mut table = Table::with_headers(entity.headers());
        match entity {
            Entity::Market => {
                let today = Local::now().date_naive().to_string();
                table.rows.push(vec![
                    today,
                    "320.0".to_string(),
                    "3000.0".to_string(),
                    "60.0".to_string(),
                ]);
            }
            Entity::Pastures => {
                table.rows.push(vec![
                    "Pasture 01".to_string(),
                    "10.0".to_string(),
                    "Brachiaria".to_string(),
                ]);
            }
            Entity::Staff => {
                table.rows.push(vec![
                    "1".to_string(),
                    config.ranch.owner_name.clone(),
                    "Owner".to_string(),
                    "Management".to_string(),
                    String::new(),
                    "Active".to_string(),
                ]);
            }
            Entity::Livestock | Entity::Checklist | Entity::DayLabor => {}
        }

        store.save_table(entity, &table)?;
        info!(entity = entity.key(), path = %path.display(), "created entity table");
    }

    Ok(())
}

/// Brings one entity's table up to the current column set and returns
/// whether anything was rewritten.
pub fn migrate_entity(store: &RecordStore, config: &AppConfig, entity: Entity) -> Result<bool> {
    let mut table = store.load_table(entity)?;
    let mut changed = false;

    for (column, default) in required_columns(entity) {
        if table.ensure_column(column, default) {
            info!(
                entity = entity.key(),
                column, default, "back-filled missing column"
            );
            changed = true;
        }
    }

    if entity == Entity::Staff {
        changed |= repair_owner_role(&mut table, &config.ranch.owner_name);
    }

    if changed {
        store.save_table(entity, &table)?;
    }
    Ok(changed)
}

/// Runs seeding plus migration over every entity, downgrading per-entity
/// migration failures to warnings. Seeding failures still propagate: a
/// data directory that cannot be created at all is not worth limping past.
pub fn run_startup(store: &RecordStore, config: &AppConfig) -> Result<()> {
    seed(store, config)?;
    for entity in Entity::ALL {
        if let Err(e) = migrate_entity(store, config, entity) {
            warn!(entity = entity.key(), error = %e, "migration skipped for entity");
        }
    }
    Ok(())
}

/// Forces the Owner role on every staff row whose name matches the
/// configured owner exactly. This is an identity repair for files migrated
/// from deployments that predate the role column, not a general rule.
fn repair_owner_role(table: &mut Table, owner_name: &str) -> bool {
    let (Some(name_idx), Some(role_idx)) = (table.column_index("name"), table.column_index("role"))
    else {
        return false;
    };

    let mut changed = false;
    for row in &mut table.rows {
        if row.get(name_idx).is_some_and(|n| n == owner_name)
            && row.get(role_idx).is_some_and(|r| r != "Owner")
        {
            row[role_idx] = "Owner".to_string();
            changed = true;
        }
    }
    changed
}
