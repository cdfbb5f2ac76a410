//! Mock detection boxes and camera sources.

/// Object class a mock detector "recognizes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    Car,
    Truck,
    Bus,
    Pedestrian,
    TrafficLight,
}

impl ObjectClass {
    pub fn label(self) -> &'static str {
        match self {
            ObjectClass::Car => "Car",
            ObjectClass::Truck => "Truck",
            ObjectClass::Bus => "Bus",
            ObjectClass::Pedestrian => "Pedestrian",
            ObjectClass::TrafficLight => "Traffic Light",
        }
    }

    pub fn category(self) -> DetectionCategory {
        match self {
            ObjectClass::Car | ObjectClass::Truck | ObjectClass::Bus => DetectionCategory::Vehicles,
            ObjectClass::Pedestrian => DetectionCategory::Pedestrians,
            ObjectClass::TrafficLight => DetectionCategory::TrafficLights,
        }
    }

    /// Overlay color on the analysis preview.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ObjectClass::Car => [0x22, 0xc5, 0x5e],
            ObjectClass::Truck | ObjectClass::Bus => [0x3b, 0x82, 0xf6],
            ObjectClass::Pedestrian => [0xea, 0xb3, 0x08],
            ObjectClass::TrafficLight => [0xef, 0x44, 0x44],
        }
    }
}

/// Switchable detection categories in the detection settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionCategory {
    Vehicles,
    Pedestrians,
    TrafficSigns,
    RoadMarkings,
    TrafficLights,
}

impl DetectionCategory {
    pub const ALL: [DetectionCategory; 5] = [
        DetectionCategory::Vehicles,
        DetectionCategory::Pedestrians,
        DetectionCategory::TrafficSigns,
        DetectionCategory::RoadMarkings,
        DetectionCategory::TrafficLights,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetectionCategory::Vehicles => "Vehicles",
            DetectionCategory::Pedestrians => "Pedestrians",
            DetectionCategory::TrafficSigns => "Traffic Signs",
            DetectionCategory::RoadMarkings => "Road Markings",
            DetectionCategory::TrafficLights => "Traffic Lights",
        }
    }

    /// Group shown in the analysis summary.
    pub fn summary_group(self) -> SummaryGroup {
        match self {
            DetectionCategory::Vehicles => SummaryGroup::Vehicles,
            DetectionCategory::Pedestrians => SummaryGroup::Pedestrians,
            DetectionCategory::TrafficSigns
            | DetectionCategory::RoadMarkings
            | DetectionCategory::TrafficLights => SummaryGroup::Infrastructure,
        }
    }
}

/// Coarse grouping used by the analysis summary tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryGroup {
    Vehicles,
    Pedestrians,
    Infrastructure,
    Other,
}

impl SummaryGroup {
    pub const ALL: [SummaryGroup; 4] = [
        SummaryGroup::Vehicles,
        SummaryGroup::Pedestrians,
        SummaryGroup::Infrastructure,
        SummaryGroup::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SummaryGroup::Vehicles => "Vehicles",
            SummaryGroup::Pedestrians => "Pedestrians",
            SummaryGroup::Infrastructure => "Infrastructure",
            SummaryGroup::Other => "Other",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            SummaryGroup::Vehicles => [0x22, 0xc5, 0x5e],
            SummaryGroup::Pedestrians => [0xea, 0xb3, 0x08],
            SummaryGroup::Infrastructure => [0xef, 0x44, 0x44],
            SummaryGroup::Other => [0x3b, 0x82, 0xf6],
        }
    }
}

/// A mock bounding box in preview pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionBox {
    pub id: u32,
    pub class: ObjectClass,
    /// Confidence in `[0, 1]`.
    pub confidence: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DetectionBox {
    pub fn confidence_percent(&self) -> f32 {
        self.confidence * 100.0
    }

    pub fn caption(&self) -> String {
        format!("{} ({:.1}%)", self.class.label(), self.confidence_percent())
    }
}

const fn det(
    id: u32,
    class: ObjectClass,
    confidence: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> DetectionBox {
    DetectionBox { id, class, confidence, x, y, width, height }
}

/// Native size of the analysis preview the boxes are laid out on.
pub const ANALYSIS_CANVAS: [f32; 2] = [720.0, 405.0];

/// Result set "produced" by analyzing an uploaded image.
pub const ANALYSIS_RESULTS: &[DetectionBox] = &[
    det(1, ObjectClass::Car, 0.982, 160.0, 100.0, 120.0, 70.0),
    det(2, ObjectClass::Car, 0.957, 380.0, 120.0, 100.0, 60.0),
    det(3, ObjectClass::Truck, 0.913, 490.0, 90.0, 150.0, 80.0),
    det(4, ObjectClass::Pedestrian, 0.885, 280.0, 220.0, 40.0, 80.0),
    det(5, ObjectClass::TrafficLight, 0.869, 420.0, 50.0, 30.0, 60.0),
];

/// Native size of the live-feed frame the boxes are laid out on.
pub const FEED_CANVAS: [f32; 2] = [560.0, 315.0];

/// Boxes overlaid on the live camera feed.
pub const FEED_DETECTIONS: &[DetectionBox] = &[
    det(1, ObjectClass::Car, 0.92, 120.0, 150.0, 80.0, 40.0),
    det(2, ObjectClass::Car, 0.88, 300.0, 180.0, 70.0, 35.0),
    det(3, ObjectClass::Truck, 0.85, 220.0, 140.0, 100.0, 50.0),
    det(4, ObjectClass::Bus, 0.79, 400.0, 160.0, 110.0, 60.0),
    det(5, ObjectClass::Pedestrian, 0.76, 180.0, 200.0, 30.0, 60.0),
];

/// Mock processing time shown in the analysis summary.
pub const PROCESSING_TIME: &str = "0.8s";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraStatus {
    Active,
    Maintenance,
}

/// A traffic camera that can be selected in the live feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSource {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub status: CameraStatus,
}

const fn cam(
    id: &'static str,
    name: &'static str,
    location: &'static str,
    status: CameraStatus,
) -> CameraSource {
    CameraSource { id, name, location, status }
}

pub const CAMERA_SOURCES: &[CameraSource] = &[
    cam("CAM-01", "Main St & 5th Ave", "Downtown", CameraStatus::Active),
    cam("CAM-02", "Highway 101 North", "Highway", CameraStatus::Active),
    cam("CAM-03", "Central Business District", "Downtown", CameraStatus::Active),
    cam("CAM-04", "West Industrial Area", "Industrial", CameraStatus::Active),
    cam("CAM-05", "Shopping Mall Entrance", "Commercial", CameraStatus::Active),
    cam("CAM-06", "University Campus", "Education", CameraStatus::Active),
    cam("CAM-07", "East Residential Area", "Residential", CameraStatus::Maintenance),
    cam("CAM-08", "South Transit Hub", "Transport", CameraStatus::Active),
];
