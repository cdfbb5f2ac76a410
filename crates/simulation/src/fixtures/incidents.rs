//! Incident fixtures for the dashboard's incident report.

/// How serious an incident is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Badge / overlay color.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Severity::High => [0xef, 0x44, 0x44],
            Severity::Medium => [0xf9, 0x73, 0x16],
            Severity::Low => [0xfb, 0xbf, 0x24],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentKind {
    Accident,
    TrafficJam,
    RoadWork,
}

impl IncidentKind {
    pub fn label(self) -> &'static str {
        match self {
            IncidentKind::Accident => "Accident",
            IncidentKind::TrafficJam => "Traffic Jam",
            IncidentKind::RoadWork => "Road Work",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentStatus {
    Active,
    Scheduled,
}

impl IncidentStatus {
    pub fn label(self) -> &'static str {
        match self {
            IncidentStatus::Active => "Active",
            IncidentStatus::Scheduled => "Scheduled",
        }
    }
}

/// One entry of an incident's timeline. `time` is `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidentUpdate {
    pub time: &'static str,
    pub text: &'static str,
}

/// Impact summary of an incident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffectedArea {
    pub lanes: &'static str,
    pub estimated_clear_time: &'static str,
    pub impact_radius: &'static str,
    pub congestion_level: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incident {
    pub id: u32,
    pub kind: IncidentKind,
    pub location: &'static str,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub respondents: &'static [&'static str],
    /// ISO-8601 local timestamp.
    pub timestamp: &'static str,
    pub description: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub updates: &'static [IncidentUpdate],
    pub affected: AffectedArea,
    pub camera_id: &'static str,
    pub camera_available: bool,
}

impl Incident {
    /// `HH:MM` part of the timestamp.
    pub fn clock_time(&self) -> &'static str {
        self.timestamp
            .split_once('T')
            .map(|(_, time)| time.get(..5).unwrap_or(time))
            .unwrap_or(self.timestamp)
    }
}

pub const INCIDENTS: &[Incident] = &[
    Incident {
        id: 1,
        kind: IncidentKind::Accident,
        location: "Main St & 5th Ave",
        severity: Severity::High,
        status: IncidentStatus::Active,
        respondents: &["Police", "Ambulance", "Fire Department"],
        timestamp: "2024-02-20T10:30:00",
        description:
            "Multi-vehicle collision with possible injuries. Traffic blocked in all directions.",
        lat: 40.7128,
        lng: -74.006,
        updates: &[
            IncidentUpdate { time: "10:30:15", text: "Incident reported by traffic camera" },
            IncidentUpdate { time: "10:31:02", text: "Dispatched emergency services" },
            IncidentUpdate { time: "10:33:45", text: "Police unit arrived on scene" },
            IncidentUpdate { time: "10:35:12", text: "Ambulance arrived on scene" },
            IncidentUpdate { time: "10:40:30", text: "Fire department arrived on scene" },
            IncidentUpdate { time: "10:45:00", text: "Traffic being diverted, expect delays" },
        ],
        affected: AffectedArea {
            lanes: "3 of 4",
            estimated_clear_time: "11:30:00",
            impact_radius: "0.5 miles",
            congestion_level: "Severe",
        },
        camera_id: "CAM-05123",
        camera_available: true,
    },
    Incident {
        id: 2,
        kind: IncidentKind::TrafficJam,
        location: "Highway 101 North",
        severity: Severity::Medium,
        status: IncidentStatus::Active,
        respondents: &["Traffic Control"],
        timestamp: "2024-02-20T10:25:00",
        description: "Heavy congestion due to rush hour. Average speed below 10mph.",
        lat: 40.7129,
        lng: -74.007,
        updates: &[
            IncidentUpdate { time: "10:25:00", text: "Slow traffic detected by sensors" },
            IncidentUpdate { time: "10:30:15", text: "Volume increased, speeds dropped below 15mph" },
            IncidentUpdate { time: "10:45:30", text: "Traffic control monitoring situation" },
        ],
        affected: AffectedArea {
            lanes: "All lanes",
            estimated_clear_time: "11:15:00",
            impact_radius: "3 miles",
            congestion_level: "Moderate",
        },
        camera_id: "CAM-HW101-42",
        camera_available: true,
    },
    Incident {
        id: 3,
        kind: IncidentKind::RoadWork,
        location: "West Industrial Area",
        severity: Severity::Low,
        status: IncidentStatus::Scheduled,
        respondents: &["Maintenance"],
        timestamp: "2024-02-20T11:00:00",
        description: "Scheduled maintenance. One lane closed. Expect minor delays.",
        lat: 40.7130,
        lng: -74.008,
        updates: &[
            IncidentUpdate { time: "09:00:00", text: "Road work scheduled for 11:00" },
            IncidentUpdate { time: "10:45:00", text: "Preparations beginning" },
            IncidentUpdate { time: "11:00:00", text: "Lane closure implemented" },
        ],
        affected: AffectedArea {
            lanes: "1 of 3",
            estimated_clear_time: "14:00:00",
            impact_radius: "0.2 miles",
            congestion_level: "Light",
        },
        camera_id: "CAM-W23",
        camera_available: false,
    },
    Incident {
        id: 4,
        kind: IncidentKind::Accident,
        location: "Broadway & 34th St",
        severity: Severity::Medium,
        status: IncidentStatus::Active,
        respondents: &["Police"],
        timestamp: "2024-02-20T10:15:00",
        description: "Vehicle collision with property damage. Right lane blocked.",
        lat: 40.7131,
        lng: -74.009,
        updates: &[
            IncidentUpdate { time: "10:15:30", text: "Incident reported by citizen app" },
            IncidentUpdate { time: "10:17:45", text: "Dispatched police unit" },
            IncidentUpdate { time: "10:22:10", text: "Police arrived on scene" },
            IncidentUpdate { time: "10:30:00", text: "Tow truck requested" },
        ],
        affected: AffectedArea {
            lanes: "1 of 3",
            estimated_clear_time: "11:00:00",
            impact_radius: "0.3 miles",
            congestion_level: "Moderate",
        },
        camera_id: "CAM-B34-01",
        camera_available: true,
    },
];

/// The first three incidents, shown in the compact "Live Incidents" card.
pub fn live_incidents() -> &'static [Incident] {
    &INCIDENTS[..3]
}

/// Count incidents per severity as (high, medium, low).
pub fn severity_breakdown(incidents: &[Incident]) -> (usize, usize, usize) {
    incidents
        .iter()
        .fold((0, 0, 0), |(h, m, l), i| match i.severity {
            Severity::High => (h + 1, m, l),
            Severity::Medium => (h, m + 1, l),
            Severity::Low => (h, m, l + 1),
        })
}
