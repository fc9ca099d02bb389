use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug)]
#[serde(tag = "type")]
pub enum CameraSettings {
    LookAt {
        look_from: [f32; 3],
        look_at: [f32; 3],
        fov: f32,
    },
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub enum ScanSettings {
    ConstantAngle,
    ConstantDistance,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum ObjectSettings {
    TiledSphere {
        location: [f32; 3],
        radius: f32,
        period: f32,
        color: [u8; 3],
        falloff: Option<f32>,
    },
    Mandelbulb {
        location: [f32; 3],
        iterations: u32,
        power: f32,
        color: [u8; 3],
    },
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub resolution: Resolution,
    pub max_steps: Option<usize>,
    pub threshold: Option<f32>,
    pub background: Option<[u8; 3]>,
    /// worker count; filled in from the machine's core count when absent
    pub threads: Option<i32>,
    pub filename: Option<String>,
    pub scan: ScanSettings,
    /// maximum object count the scene will accept; defaults to the number
    /// of objects listed
    pub capacity: Option<usize>,
    pub camera: CameraSettings,
    pub objects: Vec<ObjectSettings>,
}
