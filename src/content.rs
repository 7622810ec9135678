//! Static lesson content: technique cards and tutorials.

use serde::Serialize;

use crate::style::CenteringMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technique {
    pub method: CenteringMethod,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TutorialSection {
    pub heading: &'static str,
    pub content: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tutorial {
    pub id: &'static str,
    pub title: &'static str,
    pub sections: &'static [TutorialSection],
}

pub static TECHNIQUES: [Technique; 3] = [
    Technique {
        method: CenteringMethod::Flexbox,
        title: "Flexbox: The Flexible Friend",
        description: "Flexbox is like a yoga instructor for your divs - helping them find their center \
                      with grace and flexibility!",
        code: "/* Flexbox Centering Magic */
.parent {
  display: flex;
  justify-content: center;  /* Horizontal centering */
  align-items: center;      /* Vertical centering */
}",
    },
    Technique {
        method: CenteringMethod::Grid,
        title: "CSS Grid: The Architectural Mastermind",
        description: "CSS Grid treats your layout like a meticulously planned city - everything has \
                      its perfect place!",
        code: "/* Grid Centering Wizardry */
.parent {
  display: grid;
  place-items: center;  /* One-line centering magic! */
}",
    },
    Technique {
        method: CenteringMethod::Absolute,
        title: "Absolute Positioning: The Rebel Technique",
        description: "Absolute positioning is like a GPS for your div - telling it exactly where to land!",
        code: "/* Absolute Positioning Sorcery */
.parent {
  position: relative;
}
.child {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
}",
    },
];

pub static TUTORIALS: [Tutorial; 2] = [
    Tutorial {
        id: "flexbox",
        title: "Flexbox: The Flexible Centering Champion",
        sections: &[
            TutorialSection {
                heading: "Understanding Flexbox Centering",
                content: "Flexbox is like a yoga instructor for your divs - helping them find their \
                          center with grace and flexibility!",
                code: "/* Horizontal Centering */
.parent {
  display: flex;
  justify-content: center; /* X-axis magic */
}

/* Vertical Centering */
.parent {
  display: flex;
  align-items: center; /* Y-axis wizardry */
}

/* Perfect Centering (Both Axes) */
.parent {
  display: flex;
  justify-content: center;
  align-items: center;
}",
            },
            TutorialSection {
                heading: "Common Flexbox Patterns",
                content: "Flexbox isn't just about centering - it's a layout superhero!",
                code: "/* Distributing Space */
.parent {
  display: flex;
  justify-content: space-between; /* Spaced-out siblings */
  align-items: center;
}

/* Wrapping Content */
.parent {
  display: flex;
  flex-wrap: wrap; /* Responsive magic */
  justify-content: center;
}",
            },
        ],
    },
    Tutorial {
        id: "grid",
        title: "CSS Grid: The Architectural Layout Mastermind",
        sections: &[
            TutorialSection {
                heading: "Grid Centering Techniques",
                content: "CSS Grid treats your layout like a meticulously planned city - everything \
                          has its perfect place!",
                code: "/* One-Line Centering Magic */
.parent {
  display: grid;
  place-items: center; /* Vertical and Horizontal in one shot! */
}

/* Precise Grid Positioning */
.parent {
  display: grid;
  grid-template-columns: 1fr 200px 1fr;
  grid-template-rows: 1fr 200px 1fr;
}",
            },
            TutorialSection {
                heading: "Advanced Grid Layouts",
                content: "Grid provides ultimate control over your layout landscape!",
                code: "/* Complex Grid Centering */
.parent {
  display: grid;
  grid-template-areas:
    \". header .\"
    \"sidebar content sidebar\"
    \". footer .\";
}",
            },
        ],
    },
];

/// Find a tutorial by id, e.g. `"grid"`.
pub fn tutorial(id: &str) -> Option<&'static Tutorial> {
    TUTORIALS.iter().find(|t| t.id == id)
}

pub fn technique(method: CenteringMethod) -> &'static Technique {
    match method {
        CenteringMethod::Flexbox => &TECHNIQUES[0],
        CenteringMethod::Grid => &TECHNIQUES[1],
        CenteringMethod::Absolute => &TECHNIQUES[2],
    }
}
