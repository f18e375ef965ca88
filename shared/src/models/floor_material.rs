//! Epoxy flooring catalog and quote models
//!
//! Materials, finishes, colors and the condition/option catalogs the epoxy
//! calculator prices from. Unit prices here are the defaults; the admin pricing
//! table overrides them at runtime.

use serde::{Deserialize, Serialize};

/// Minimum service (dispatch) fee in won
pub const MIN_SERVICE_FEE: f64 = 300_000.0;

/// Flat fee when the chosen color must be mixed on site
pub const COLOR_MIXING_FEE: f64 = 50_000.0;

/// Finish family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaterialId {
    TransparentEpoxy,
    SolidEpoxy,
    BeanGravel,
    UrethaneWaterproof,
    /// Any id not in the catalog; priced by the legacy area bands
    #[serde(other)]
    Unlisted,
}

impl MaterialId {
    /// Rule key for the `material_base` category, `None` for unlisted materials
    pub fn rule_key(&self) -> Option<&'static str> {
        match self {
            Self::TransparentEpoxy => Some("transparent_epoxy"),
            Self::SolidEpoxy => Some("solid_epoxy"),
            Self::BeanGravel => Some("bean_gravel"),
            Self::UrethaneWaterproof => Some("urethane_waterproof"),
            Self::Unlisted => None,
        }
    }
}

/// Gloss level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FinishId {
    Gloss,
    SemiGloss,
    Matte,
    Natural,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ColorId {
    Clear,
    Gray,
    Green,
    Blue,
    Red,
    Yellow,
    Black,
    Beige,
    White,
    DarkPearl,
    Mix,
}

/// Catalog entry for a finish family
#[derive(Debug, Clone, Serialize)]
pub struct FloorMaterial {
    pub id: MaterialId,
    pub name: &'static str,
    pub description: &'static str,
    pub allowed_finishes: &'static [FinishId],
    pub allowed_colors: &'static [ColorId],
    /// Pre-mixed colors; empty means every allowed color is pre-mixed
    pub base_colors: &'static [ColorId],
    /// Default base rate per m²
    pub price_per_m2: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Finish {
    pub id: FinishId,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Color {
    pub id: ColorId,
    pub name: &'static str,
    /// CSS color; "transparent" or a gradient for clear/mixed aggregates
    pub hex: &'static str,
}

pub const FLOOR_MATERIALS: &[FloorMaterial] = &[
    FloorMaterial {
        id: MaterialId::TransparentEpoxy,
        name: "투명 에폭시 (빈티지)",
        description: "콘크리트 질감을 살리는 투명 코팅",
        allowed_finishes: &[FinishId::Gloss, FinishId::SemiGloss, FinishId::Matte],
        allowed_colors: &[ColorId::Clear],
        base_colors: &[],
        price_per_m2: 35_000.0,
    },
    FloorMaterial {
        id: MaterialId::SolidEpoxy,
        name: "칼라 에폭시",
        description: "단색으로 깔끔하게 마감",
        allowed_finishes: &[FinishId::Gloss, FinishId::SemiGloss, FinishId::Matte],
        allowed_colors: &[
            ColorId::Gray,
            ColorId::Green,
            ColorId::Blue,
            ColorId::Red,
            ColorId::Yellow,
            ColorId::Black,
        ],
        base_colors: &[ColorId::Gray, ColorId::Green],
        price_per_m2: 45_000.0,
    },
    FloorMaterial {
        id: MaterialId::BeanGravel,
        name: "콩자갈 바닥",
        description: "자연 자갈을 에폭시와 섞어 미장",
        allowed_finishes: &[FinishId::Natural],
        allowed_colors: &[ColorId::Beige, ColorId::White, ColorId::DarkPearl, ColorId::Mix],
        base_colors: &[],
        price_per_m2: 80_000.0,
    },
    FloorMaterial {
        id: MaterialId::UrethaneWaterproof,
        name: "우레탄 방수",
        description: "옥상/실외 주차장 방수",
        allowed_finishes: &[FinishId::Gloss],
        allowed_colors: &[ColorId::Green, ColorId::Gray],
        base_colors: &[],
        price_per_m2: 40_000.0,
    },
];

pub const FINISHES: &[Finish] = &[
    Finish { id: FinishId::Gloss, name: "유광", description: "반짝이는 광택" },
    Finish { id: FinishId::SemiGloss, name: "반광", description: "은은한 광택" },
    Finish { id: FinishId::Matte, name: "무광", description: "광택 없음" },
    Finish { id: FinishId::Natural, name: "자연 질감", description: "자갈 본연의 텍스처" },
];

pub const COLORS: &[Color] = &[
    Color { id: ColorId::Clear, name: "투명", hex: "transparent" },
    Color { id: ColorId::Gray, name: "회색", hex: "#6B7280" },
    Color { id: ColorId::Green, name: "녹색", hex: "#22C55E" },
    Color { id: ColorId::White, name: "흰색", hex: "#FFFFFF" },
    Color { id: ColorId::Blue, name: "파랑", hex: "#3B82F6" },
    Color { id: ColorId::Red, name: "빨강", hex: "#EF4444" },
    Color { id: ColorId::Yellow, name: "노랑", hex: "#FACC15" },
    Color { id: ColorId::Black, name: "검정", hex: "#1F2937" },
    Color { id: ColorId::Beige, name: "베이지", hex: "#D4C4A8" },
    Color { id: ColorId::DarkPearl, name: "흑진주", hex: "#2D3748" },
    Color {
        id: ColorId::Mix,
        name: "믹스",
        hex: "linear-gradient(135deg, #D4C4A8 25%, #FFFFFF 50%, #2D3748 75%)",
    },
];

impl FloorMaterial {
    /// Catalog lookup; unlisted materials have no entry
    pub fn find(id: MaterialId) -> Option<&'static FloorMaterial> {
        FLOOR_MATERIALS.iter().find(|m| m.id == id)
    }

    pub fn finishes(&self) -> Vec<&'static Finish> {
        self.allowed_finishes
            .iter()
            .filter_map(|id| FINISHES.iter().find(|f| f.id == *id))
            .collect()
    }

    pub fn colors(&self) -> Vec<&'static Color> {
        self.allowed_colors
            .iter()
            .filter_map(|id| COLORS.iter().find(|c| c.id == *id))
            .collect()
    }

    /// Whether a color ships pre-mixed for this material
    pub fn is_base_color(&self, color: ColorId) -> bool {
        self.base_colors.is_empty() || self.base_colors.contains(&color)
    }
}

/// Whether picking `color` on `material` incurs the color-mixing fee
///
/// Materials without a base-color list never charge it.
pub fn requires_color_mixing_fee(material: MaterialId, color: ColorId) -> bool {
    match FloorMaterial::find(material) {
        Some(m) => !m.is_base_color(color),
        None => false,
    }
}

/// Selectable option with a per-m² price
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price_per_m2: f64,
}

pub const ANTI_SLIP: SurfaceOption = SurfaceOption {
    id: "anti_slip",
    name: "미끄럼 방지",
    description: "논슬립 골재 살포 처리",
    price_per_m2: 7_500.0,
};

pub const SURFACE_PROTECTION: SurfaceOption = SurfaceOption {
    id: "surface_protection",
    name: "표면 보호막",
    description: "마감 위 보호 코팅",
    price_per_m2: 7_500.0,
};

pub const SELF_LEVELING: SurfaceOption = SurfaceOption {
    id: "self_leveling",
    name: "셀프레벨링",
    description: "바닥 수평 맞추기 기초작업 (선택)",
    price_per_m2: 30_000.0,
};

/// Substrate quality (바닥 상태)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FloorQuality {
    Good,
    Normal,
    Poor,
}

/// Crack severity (균열 상태)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CrackCondition {
    Minor,
    Moderate,
    Severe,
}

/// Legacy surface condition sent by older forms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FloorCondition {
    Good,
    Normal,
    Bad,
}

/// Catalog entry for a condition choice
#[derive(Debug, Clone, Serialize)]
pub struct ConditionInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Surcharge per m²
    pub price_per_m2: f64,
}

impl FloorQuality {
    pub const ALL: [FloorQuality; 3] = [Self::Good, Self::Normal, Self::Poor];

    pub fn info(&self) -> ConditionInfo {
        match self {
            Self::Good => ConditionInfo {
                name: "양호",
                description: "평탄하고 오염이 적은 바닥",
                price_per_m2: 0.0,
            },
            Self::Normal => ConditionInfo {
                name: "보통",
                description: "일반적인 사용감이 있는 바닥",
                price_per_m2: 0.0,
            },
            Self::Poor => ConditionInfo {
                name: "불량",
                description: "들뜸, 기름때 등 전처리가 필요한 바닥",
                price_per_m2: 15_000.0,
            },
        }
    }
}

impl CrackCondition {
    pub const ALL: [CrackCondition; 3] = [Self::Minor, Self::Moderate, Self::Severe];

    pub fn info(&self) -> ConditionInfo {
        match self {
            Self::Minor => ConditionInfo {
                name: "없음/미세",
                description: "눈에 띄는 균열이 거의 없음",
                price_per_m2: 0.0,
            },
            Self::Moderate => ConditionInfo {
                name: "보통",
                description: "부분적인 균열 보수",
                price_per_m2: 0.0,
            },
            Self::Severe => ConditionInfo {
                name: "심각",
                description: "전면 균열 보수 및 충진",
                price_per_m2: 30_000.0,
            },
        }
    }
}

impl FloorCondition {
    /// Quality level this legacy value stands for
    pub fn as_quality(&self) -> FloorQuality {
        match self {
            Self::Good => FloorQuality::Good,
            Self::Normal => FloorQuality::Normal,
            Self::Bad => FloorQuality::Poor,
        }
    }
}

/// Epoxy quote input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpoxyQuoteInput {
    pub material_id: MaterialId,
    /// Area in m²
    pub area: f64,
    /// Legacy condition, only consulted when `floor_quality` is absent
    #[serde(default)]
    pub floor_condition: Option<FloorCondition>,
    #[serde(default)]
    pub floor_quality: Option<FloorQuality>,
    #[serde(default)]
    pub crack_condition: Option<CrackCondition>,
    #[serde(default)]
    pub include_anti_slip: bool,
    #[serde(default)]
    pub include_surface_protection: bool,
    #[serde(default)]
    pub include_self_leveling: bool,
    #[serde(default)]
    pub needs_color_mixing_fee: bool,
}

impl EpoxyQuoteInput {
    /// Input with no conditions or options selected
    pub fn new(material_id: MaterialId, area: f64) -> Self {
        Self {
            material_id,
            area,
            floor_condition: None,
            floor_quality: None,
            crack_condition: None,
            include_anti_slip: false,
            include_surface_protection: false,
            include_self_leveling: false,
            needs_color_mixing_fee: false,
        }
    }

    /// Quality to price: explicit value first, legacy condition second
    pub fn effective_quality(&self) -> Option<FloorQuality> {
        self.floor_quality
            .or_else(|| self.floor_condition.map(|c| c.as_quality()))
    }
}

/// Itemized epoxy quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpoxyPriceBreakdown {
    pub base_price_per_m2: f64,
    pub base_price: f64,
    pub floor_quality_price: f64,
    pub crack_repair_price: f64,
    pub anti_slip_price: f64,
    pub surface_protection_price: f64,
    pub self_leveling_price_per_m2: f64,
    pub self_leveling_price: f64,
    pub color_mixing_fee: f64,
    pub subtotal: f64,
    /// Subtotal was below the minimum service fee and got raised to it
    pub is_min_fee_applied: bool,
    pub total: f64,
}
