//! Login / logout commands

use anyhow::Result;
use std::path::Path;

use place_tracker::User;
use place_tracker::config::Config;

pub fn login_command(config_path: &Path, name: &str, email: &str) -> Result<()> {
    let user = User::login(name, email)?;
    Config::update(config_path, |config| config.set_user(&user))?;

    println!("Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn logout_command(config_path: &Path) -> Result<()> {
    let mut previous = None;
    Config::update(config_path, |config| {
        previous = config.current_user();
        config.clear_user();
    })?;

    match previous {
        Some(user) => println!("Signed out {}.", user.email),
        None => println!("Not signed in."),
    }
    Ok(())
}
