use crate::math::Vec2;
use crate::{Dimensions, Error, Physics, Result, Settings};
use json::{self, JsonValue};
use std::{fs::File, io::Read, path::Path};

// Missing keys fall back to `$default`, present keys must have the right type.
macro_rules! get_json_or {
    ($json:ident, $section:literal, $key:literal, $func:ident, $default:expr) => {{
        let value = &$json[$section][$key];
        if value.is_null() {
            $default
        } else {
            value.$func().ok_or_else(|| {
                Error::Settings(concat!("Wrong type of ", $section, "/", $key).to_owned())
            })?
        }
    }};
}

macro_rules! ensure_positive {
    ($value:expr, $name:literal) => {
        if !($value > 0.) {
            return Err(Error::Settings(format!(
                concat!($name, " has to be positive, got {}"),
                $value
            )));
        }
    };
}

pub fn parse_settings<P: AsRef<Path>>(settings_file_path: P) -> Result<Settings> {
    settings_from_json(&read_json(settings_file_path.as_ref())?)
}

pub fn parse_from_string(content: &str) -> Result<Settings> {
    settings_from_json(&json::parse(content)?)
}

fn read_json(file_path: &Path) -> Result<JsonValue> {
    let io_error = |source| Error::Io {
        path: file_path.to_owned(),
        source,
    };
    let mut file_content = String::new();
    File::open(file_path)
        .and_then(|mut file| file.read_to_string(&mut file_content))
        .map_err(io_error)?;
    Ok(json::parse(&file_content)?)
}

fn settings_from_json(json: &JsonValue) -> Result<Settings> {
    let Settings {
        landscape_width,
        world_height,
        zoom_radius,
        lander_dimensions: Dimensions { width, height },
        ..
    } = Settings::default();

    let settings = Settings {
        physics: parse_physics(json)?,
        landscape_width: get_json_or!(json, "World", "LandscapeWidth", as_f32, landscape_width),
        world_height: get_json_or!(json, "World", "Height", as_f32, world_height),
        zoom_radius: get_json_or!(json, "World", "ZoomRadius", as_f32, zoom_radius),
        lander_dimensions: Dimensions {
            width: get_json_or!(json, "Lander", "Width", as_f32, width),
            height: get_json_or!(json, "Lander", "Height", as_f32, height),
        },
        terrain_model: parse_terrain(&json["Terrain"])?,
    };

    ensure_positive!(settings.landscape_width, "World/LandscapeWidth");
    ensure_positive!(settings.world_height, "World/Height");
    ensure_positive!(settings.zoom_radius, "World/ZoomRadius");
    ensure_positive!(settings.lander_dimensions.width, "Lander/Width");
    ensure_positive!(settings.lander_dimensions.height, "Lander/Height");

    log::debug!("Loaded settings: {settings:?}");
    Ok(settings)
}

fn parse_physics(json: &JsonValue) -> Result<Physics> {
    let defaults = Physics::default();
    let max_spin = get_json_or!(json, "Physics", "MaxSpin", as_f32, defaults.max_spin());
    let fuel_per_thrust = defaults.fuel_per_thrust();
    let fuel_per_thrust = get_json_or!(json, "Physics", "FuelPerThrust", as_i32, fuel_per_thrust);
    ensure_positive!(max_spin, "Physics/MaxSpin");
    if fuel_per_thrust <= 0 {
        return Err(Error::Settings(format!(
            "Physics/FuelPerThrust has to be positive, got {fuel_per_thrust}"
        )));
    }

    let gravity = get_json_or!(json, "Physics", "Gravity", as_f32, defaults.gravity());
    let thrust = get_json_or!(json, "Physics", "Thrust", as_f32, defaults.thrust());
    let spin_acceleration = get_json_or!(
        json,
        "Physics",
        "SpinAcceleration",
        as_f32,
        defaults.spin_acceleration()
    );

    Ok(defaults
        .with_gravity(gravity)
        .with_thrust(thrust)
        .with_spin_acceleration(spin_acceleration)
        .with_max_spin(max_spin)
        .with_fuel_per_thrust(fuel_per_thrust))
}

fn parse_terrain(terrain_array: &JsonValue) -> Result<Option<Vec<Vec2>>> {
    if terrain_array.is_null() {
        return Ok(None);
    }
    if !terrain_array.is_array() {
        return Err(Error::Settings("Terrain has to be an array".to_owned()));
    }
    terrain_array
        .members()
        .map(|point_json| {
            let err = || Error::Settings("Terrain has to contain numeric landpoints".to_owned());
            let x = point_json[0].as_f32().ok_or_else(err)?;
            let y = point_json[1].as_f32().ok_or_else(err)?;
            Ok(Vec2::new(x, y))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
