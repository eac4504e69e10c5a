use super::open_session;

/// Remove every stored profile key. Configuration is kept.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    session.reset()?;
    println!("progression reset");
    Ok(())
}
