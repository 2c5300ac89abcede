use std::env;
use std::path::Path;
use std::process::Command;

const REQUIRED_ASSETS: [&str; 3] = ["racecar.png", "racecar-alt.png", "fonts/hud.ttf"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/");

    // The simulation core builds without SDL.
    if env::var_os("CARGO_FEATURE_GUI").is_none() {
        return;
    }

    check_assets();
    link_sdl2_libraries();
}

fn check_assets() {
    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let assets_dir = Path::new(&manifest_dir).join("assets");
    for asset in REQUIRED_ASSETS {
        if !assets_dir.join(asset).exists() {
            println!(
                "cargo:warning=missing asset assets/{}, the game will refuse to start without it",
                asset
            );
        }
    }
}

fn link_sdl2_libraries() {
    #[cfg(target_os = "macos")]
    {
        if is_homebrew_available() {
            for package in ["sdl2", "sdl2_image", "sdl2_ttf"] {
                match get_homebrew_path(package) {
                    Ok(path) => println!("cargo:rustc-link-search={}/lib", path),
                    Err(e) => println!("cargo:warning={} (try 'brew install {}')", e, package),
                }
            }
        } else {
            println!("cargo:warning=Homebrew not found, SDL2 libraries must be on the linker path");
        }
    }
}

#[allow(dead_code)]
fn is_homebrew_available() -> bool {
    Command::new("brew").arg("--version").output().is_ok()
}

#[allow(dead_code)]
fn get_homebrew_path(package: &str) -> Result<String, String> {
    match Command::new("brew").args(["--prefix", package]).output() {
        Ok(output) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(_) => Err(format!("package {} not found in homebrew", package)),
        Err(e) => Err(format!("failed to execute brew: {}", e)),
    }
}
