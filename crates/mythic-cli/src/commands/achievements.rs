use super::{open_session, print_json};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session()?;
    print_json(&session.state().achievements)
}
