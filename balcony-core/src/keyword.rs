//! Closed keyword enums shared by the domain model.
//!
//! Each enum maps one-to-one onto the lowercase or camelCase keyword used in
//! catalog files and request payloads, giving exhaustive `match` checking
//! where the scorer branches on them.

/// Declare a keyword enum with `as_str`, `Display`, `FromStr` and optional
/// serde support.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $text))]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the canonical keyword for this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| format!("unknown {} '{s}'", $label))
            }
        }
    };
}

keyword_enum! {
    /// Compass direction a balcony faces.
    pub enum Orientation("orientation") {
        /// Faces north.
        North => "north",
        /// Faces south.
        South => "south",
        /// Faces east.
        East => "east",
        /// Faces west.
        West => "west",
        /// Faces north-east.
        Northeast => "northeast",
        /// Faces north-west.
        Northwest => "northwest",
        /// Faces south-east.
        Southeast => "southeast",
        /// Faces south-west.
        Southwest => "southwest",
    }
}

keyword_enum! {
    /// Balcony floor surface. Informational only.
    pub enum FloorMaterial("floor material") {
        /// Timber decking.
        Wood => "wood",
        /// Ceramic or stone tiles.
        Tile => "tile",
        /// Poured concrete.
        Concrete => "concrete",
        /// Metal grating or sheet.
        Metal => "metal",
    }
}

keyword_enum! {
    /// Broad horticultural grouping of a catalog entry.
    pub enum PlantCategory("plant category") {
        /// Grown mainly for flowers.
        Flowering => "flowering",
        /// Grown mainly for leaves.
        Foliage => "foliage",
        /// Culinary or aromatic herb.
        Herb => "herb",
        /// Edible crop.
        Vegetable => "vegetable",
        /// Water-storing succulent.
        Succulent => "succulent",
        /// Climbing or trailing vine.
        Vine => "vine",
        /// Woody shrub.
        Shrub => "shrub",
    }
}

keyword_enum! {
    /// Light regime a plant is adapted to.
    pub enum LightType("light type") {
        /// Six or more hours of direct sun.
        FullSun => "fullSun",
        /// A few hours of direct sun or dappled light.
        PartialShade => "partialShade",
        /// Little or no direct sun.
        FullShade => "fullShade",
    }
}

keyword_enum! {
    /// Relative speed at which a plant reaches maturity.
    pub enum GrowthRate("growth rate") {
        /// Slow grower.
        Slow => "slow",
        /// Medium grower.
        Medium => "medium",
        /// Fast grower.
        Fast => "fast",
    }
}

keyword_enum! {
    /// Coarse difficulty rating for looking after a plant.
    pub enum CareLevel("care level") {
        /// Suitable for beginners.
        Easy => "easy",
        /// Needs regular attention.
        Moderate => "moderate",
        /// Needs experience.
        Challenging => "challenging",
    }
}

keyword_enum! {
    /// Watering demand.
    pub enum WaterNeeds("water needs") {
        /// Tolerates dry spells.
        Low => "low",
        /// Regular watering.
        Moderate => "moderate",
        /// Keep consistently moist.
        High => "high",
    }
}

keyword_enum! {
    /// Preferred growing medium.
    pub enum SoilType("soil type") {
        /// Free-draining mix.
        WellDraining => "well-draining",
        /// Moisture-retentive mix.
        Moist => "moist",
        /// Ericaceous mix.
        Acidic => "acidic",
        /// Gritty, sandy mix.
        Sandy => "sandy",
    }
}

keyword_enum! {
    /// Season in which a plant flowers.
    pub enum Season("season") {
        /// March to May in the northern hemisphere.
        Spring => "spring",
        /// June to August.
        Summer => "summer",
        /// September to November.
        Autumn => "autumn",
        /// December to February.
        Winter => "winter",
    }
}
