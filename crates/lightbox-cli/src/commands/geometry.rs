use anyhow::Result;
use clap::Args;
use lightbox_core::geometry::{
    clamp_translation, min_scale, resting_transform, ImageSize, Translate, Viewport,
};
use lightbox_core::layout::{layout, Platform};
use lightbox_core::LightboxError;

use crate::summary::print_geometry_summary;

#[derive(Args)]
pub struct GeometryArgs {
    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_dimensions)]
    pub viewport: (f32, f32),

    /// Intrinsic image size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_dimensions)]
    pub image: (f32, f32),

    /// Also show the pan limits at this scale
    #[arg(long)]
    pub scale: Option<f32>,

    /// Target platform for the header layout
    #[arg(long, value_enum, default_value = "other")]
    pub platform: PlatformArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum PlatformArg {
    Ios,
    Android,
    Other,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Android => Platform::Android,
            PlatformArg::Other => Platform::Other,
        }
    }
}

/// Parse `WIDTHxHEIGHT`, e.g. `375x667`.
pub fn parse_dimensions(s: &str) -> std::result::Result<(f32, f32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f32 = w
        .trim()
        .parse()
        .map_err(|_| format!("Invalid width '{w}'"))?;
    let h: f32 = h
        .trim()
        .parse()
        .map_err(|_| format!("Invalid height '{h}'"))?;
    Ok((w, h))
}

pub fn run(args: &GeometryArgs) -> Result<()> {
    let viewport = Viewport::new(args.viewport.0, args.viewport.1);
    if !viewport.is_valid() {
        return Err(LightboxError::InvalidDimensions {
            width: viewport.width,
            height: viewport.height,
        }
        .into());
    }
    let image = ImageSize::new(args.image.0, args.image.1);
    let resting = resting_transform(image, viewport).ok_or(LightboxError::InvalidDimensions {
        width: image.width,
        height: image.height,
    })?;
    let rest_scale = min_scale(image, viewport).unwrap_or(resting.scale);

    // Far-away proposals land exactly on the pan limits.
    let limits = args.scale.map(|scale| {
        let far = f32::MAX / 4.0;
        let upper = clamp_translation(Translate::new(far, far), scale, image, viewport);
        let lower = clamp_translation(Translate::new(-far, -far), scale, image, viewport);
        (scale, lower, upper)
    });

    print_geometry_summary(
        image,
        viewport,
        rest_scale,
        resting.translate,
        limits,
        &layout(viewport, args.platform.into()),
    );
    Ok(())
}
