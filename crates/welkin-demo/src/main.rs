//! Demo binary that computes one frame of sky parameters and bakes a cloud
//! density texture.
//!
//! Configuration is loaded from `welkin.ron` next to the working directory.
//! Run with `cargo run -p welkin-demo`; the baked density map lands in
//! `cloud_density.png`, and the per-frame uniforms are logged.

use std::path::Path;

use tracing::info;
use welkin_astro::Observer;
use welkin_atmosphere::{AtmosphereUniform, CloudLayerParams, ScatteringParams};
use welkin_config::SkyConfig;
use welkin_noise::{NoiseGenerator, dither};
use welkin_sky::{CloudBakeConfig, CloudLayer, FrameContext, MoonLayer, SkyLayer, StarLayer, SunLayer};
use welkin_time::{DateTime, JulianDay, calendar, julian_day};

/// Julian Day of the Unix epoch, 1970-01-01 0h UT.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

fn system_clock_julian_day() -> JulianDay {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    JulianDay(UNIX_EPOCH_JD + since_epoch.as_secs_f64() / 86_400.0)
}

fn write_density_png(path: &Path, size: u32, density: &[f32]) -> Result<(), png::EncodingError> {
    let file = std::fs::File::create(path)?;
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), size, size);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let bytes: Vec<u8> = density
        .iter()
        .map(|&d| (d.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();
    writer.write_image_data(&bytes)?;
    Ok(())
}

fn main() {
    let config = SkyConfig::load_or_default(Path::new("welkin.ron")).unwrap_or_else(|err| {
        eprintln!("config error: {err}; falling back to defaults");
        SkyConfig::default()
    });
    welkin_log::init_logging(Some(Path::new("logs")), cfg!(debug_assertions), Some(&config));

    let t = if config.time.follow_system_clock {
        system_clock_julian_day()
    } else {
        JulianDay(config.time.start_julian_day)
    };
    let when: DateTime = calendar(t);
    info!(
        jd = t.0,
        "frame at {:04}-{:02}-{:02} {:02}:{:02} UT",
        when.year,
        when.month,
        when.day,
        when.hour,
        when.minute
    );
    // Conversion sanity: the calendar fields must map back to the same day.
    if let Ok(back) = julian_day(&when) {
        debug_assert!((back.0 - t.0).abs() < 1e-6);
    }

    let observer = Observer::from_degrees(
        config.observer.latitude_deg,
        config.observer.longitude_deg,
    );
    let ctx = FrameContext::new(t, observer);

    // Assemble the layer stack from configuration.
    let mut sun = SunLayer::new();
    let mut moon = MoonLayer::new();
    let mut stars = StarLayer::new(config.stars.seed, config.stars.candidate_count);
    let mut clouds: Vec<CloudLayer> = config
        .cloud_layers
        .iter()
        .map(|layer| {
            let mut params = CloudLayerParams::stratus(layer.altitude_m);
            params.coverage = layer.coverage;
            params.sharpness = layer.sharpness;
            let mut cloud = CloudLayer::new(
                params,
                CloudBakeConfig {
                    size: layer.texture_size,
                    alpha: layer.alpha,
                    beta: layer.beta,
                    octaves: layer.octaves,
                    coverage: layer.coverage,
                    sharpness: layer.sharpness,
                },
                layer.seed,
            );
            cloud.set_wind_velocity(glam::DVec2::new(
                layer.wind_velocity_m_s.0,
                layer.wind_velocity_m_s.1,
            ));
            cloud
        })
        .collect();

    {
        let mut layers: Vec<&mut dyn SkyLayer> = vec![&mut sun, &mut moon, &mut stars];
        for cloud in &mut clouds {
            layers.push(cloud);
        }
        for layer in &mut layers {
            layer.precompute();
            layer.update(&ctx);
        }
    }

    info!(
        altitude_deg = ctx.sun.altitude.to_degrees(),
        azimuth_deg = ctx.sun.azimuth.to_degrees(),
        intensity = sun.uniform().intensity,
        "sun"
    );
    info!(
        altitude_deg = ctx.moon.altitude.to_degrees(),
        azimuth_deg = ctx.moon.azimuth.to_degrees(),
        phase = moon.uniform().phase_fraction,
        "moon"
    );
    info!(
        catalog = stars.catalog().len(),
        visibility = stars.uniform().visibility,
        "stars"
    );

    let atmosphere =
        AtmosphereUniform::pack(&ScatteringParams::earth(), ctx.sun.direction());
    info!(
        bytes = std::mem::size_of::<AtmosphereUniform>(),
        sun_intensity = atmosphere.sun_intensity,
        "atmosphere uniform packed"
    );

    // Horizon-to-zenith optical path sweep, the scattering integration input.
    for y in [0.0, 0.25, 0.5, 1.0] {
        match welkin_astro::view_distance_within_atmosphere(y, true) {
            Ok(d) => info!(y, meters = d, "atmosphere path"),
            Err(err) => tracing::warn!(y, %err, "atmosphere path rejected"),
        }
    }

    // Bake the first configured cloud layer (or a default one) to a PNG.
    let (bake_seed, bake_config) = config
        .cloud_layers
        .first()
        .map(|layer| {
            (
                layer.seed,
                CloudBakeConfig {
                    size: layer.texture_size,
                    alpha: layer.alpha,
                    beta: layer.beta,
                    octaves: layer.octaves,
                    coverage: layer.coverage,
                    sharpness: layer.sharpness,
                },
            )
        })
        .unwrap_or((0, CloudBakeConfig::default()));

    let generator = NoiseGenerator::new(bake_seed);
    match welkin_sky::bake_density_map(&generator, &bake_config) {
        Ok(density) => {
            let path = Path::new("cloud_density.png");
            match write_density_png(path, bake_config.size, &density) {
                Ok(()) => info!(?path, size = bake_config.size, "density map written"),
                Err(err) => tracing::error!(%err, "could not write density map"),
            }
        }
        Err(err) => tracing::error!(%err, "cloud bake rejected"),
    }

    // A corner of the dither pattern, to eyeball the banding breakup.
    let sample: Vec<f32> = (0..4)
        .map(|i| dither(i as f32, 0.0, config.dither.seed))
        .collect();
    info!(?sample, amplitude = config.dither.amplitude, "dither row");
}
