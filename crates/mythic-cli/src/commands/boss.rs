use mythic_core::Moment;
use serde_json::json;

use super::{open_session, print_json};

/// Show the boss of the current week, rotating a new one in if needed.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let (boss, _) = session.current_boss(Moment::now());
    let Some(boss) = boss else {
        println!("no boss this week");
        return Ok(());
    };
    let hp_percent = if boss.max_hp == 0 {
        0
    } else {
        u64::from(boss.current_hp) * 100 / u64::from(boss.max_hp)
    };
    print_json(&json!({
        "boss": boss,
        "hp_percent": hp_percent,
    }))
}
