//! ColorBrewer qualitative palettes at their largest size.
//!
//! A qualitative scheme of size `n` is the first `n` colors of the largest one.

/// Smallest palette size registered.
pub const MIN_COLORS: usize = 3;

pub const QUALITATIVE: &[(&str, &[&str])] = &[
    (
        "Accent",
        &[
            "rgb(127,201,127)",
            "rgb(190,174,212)",
            "rgb(253,192,134)",
            "rgb(255,255,153)",
            "rgb(56,108,176)",
            "rgb(240,2,127)",
            "rgb(191,91,23)",
            "rgb(102,102,102)",
        ],
    ),
    (
        "Dark2",
        &[
            "rgb(27,158,119)",
            "rgb(217,95,2)",
            "rgb(117,112,179)",
            "rgb(231,41,138)",
            "rgb(102,166,30)",
            "rgb(230,171,2)",
            "rgb(166,118,29)",
            "rgb(102,102,102)",
        ],
    ),
    (
        "Paired",
        &[
            "rgb(166,206,227)",
            "rgb(31,120,180)",
            "rgb(178,223,138)",
            "rgb(51,160,44)",
            "rgb(251,154,153)",
            "rgb(227,26,28)",
            "rgb(253,191,111)",
            "rgb(255,127,0)",
            "rgb(202,178,214)",
            "rgb(106,61,154)",
            "rgb(255,255,153)",
            "rgb(177,89,40)",
        ],
    ),
    (
        "Pastel1",
        &[
            "rgb(251,180,174)",
            "rgb(179,205,227)",
            "rgb(204,235,197)",
            "rgb(222,203,228)",
            "rgb(254,217,166)",
            "rgb(255,255,204)",
            "rgb(229,216,189)",
            "rgb(253,218,236)",
            "rgb(242,242,242)",
        ],
    ),
    (
        "Pastel2",
        &[
            "rgb(179,226,205)",
            "rgb(253,205,172)",
            "rgb(203,213,232)",
            "rgb(244,202,228)",
            "rgb(230,245,201)",
            "rgb(255,242,174)",
            "rgb(241,226,204)",
            "rgb(204,204,204)",
        ],
    ),
    (
        "Set1",
        &[
            "rgb(228,26,28)",
            "rgb(55,126,184)",
            "rgb(77,175,74)",
            "rgb(152,78,163)",
            "rgb(255,127,0)",
            "rgb(255,255,51)",
            "rgb(166,86,40)",
            "rgb(247,129,191)",
            "rgb(153,153,153)",
        ],
    ),
    (
        "Set2",
        &[
            "rgb(102,194,165)",
            "rgb(252,141,98)",
            "rgb(141,160,203)",
            "rgb(231,138,195)",
            "rgb(166,216,84)",
            "rgb(255,217,47)",
            "rgb(229,196,148)",
            "rgb(179,179,179)",
        ],
    ),
    (
        "Set3",
        &[
            "rgb(141,211,199)",
            "rgb(255,255,179)",
            "rgb(190,186,218)",
            "rgb(251,128,114)",
            "rgb(128,177,211)",
            "rgb(253,180,98)",
            "rgb(179,222,105)",
            "rgb(252,205,229)",
            "rgb(217,217,217)",
            "rgb(188,128,189)",
            "rgb(204,235,197)",
            "rgb(255,237,111)",
        ],
    ),
];
