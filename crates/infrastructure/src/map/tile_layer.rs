//! Raster tile layer

use domain::value_objects::GeoLocation;

/// Highest zoom level served by the standard OSM tile servers
pub const MAX_ZOOM: u8 = 19;

/// An XYZ raster tile source such as `https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    url_template: String,
    attribution: String,
    subdomains: Vec<String>,
}

impl TileLayer {
    pub fn new(
        url_template: impl Into<String>,
        attribution: impl Into<String>,
        subdomains: Vec<String>,
    ) -> Self {
        Self {
            url_template: url_template.into(),
            attribution: attribution.into(),
            subdomains,
        }
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// URL of one tile
    ///
    /// `{s}` rotates through the subdomains by `(x + y) mod len` so
    /// neighbouring tiles are spread across servers.
    pub fn tile_url(&self, x: u32, y: u32, z: u8) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (u64::from(x) + u64::from(y)) % self.subdomains.len() as u64;
            usize::try_from(index)
                .ok()
                .and_then(|i| self.subdomains.get(i))
                .map_or("", String::as_str)
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }

    /// Web Mercator tile coordinates containing `location` at zoom `z`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tile_for(location: GeoLocation, z: u8) -> (u32, u32) {
        let n = f64::from(1_u32 << z.min(MAX_ZOOM));
        let max = n - 1.0;

        let x = (location.longitude() + 180.0) / 360.0 * n;
        let lat = location.latitude().to_radians();
        let y = (1.0 - lat.tan().asinh() / std::f64::consts::PI) / 2.0 * n;

        (x.floor().clamp(0.0, max) as u32, y.floor().clamp(0.0, max) as u32)
    }

    /// URL of the tile that contains `location`
    pub fn tile_url_at(&self, location: GeoLocation, z: u8) -> String {
        let (x, y) = Self::tile_for(location, z);
        self.tile_url(x, y, z)
    }
}
