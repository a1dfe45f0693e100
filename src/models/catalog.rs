//! Closed catalogs of academic attributes, interest tags and activities.

labeled_enum! {
    /// School year, ordered from first to fourth.
    pub enum Grade {
        First => "1학년",
        Second => "2학년",
        Third => "3학년",
        Fourth => "4학년",
    }
}

impl Grade {
    /// Grade for a 1-based school year.
    pub fn from_year(year: u8) -> Option<Self> {
        match year {
            1 => Some(Grade::First),
            2 => Some(Grade::Second),
            3 => Some(Grade::Third),
            4 => Some(Grade::Fourth),
            _ => None,
        }
    }
}

labeled_enum! {
    pub enum College {
        Engineering => "공과대학",
        Business => "경영대학",
        SocialSciences => "사회과학대학",
        Humanities => "인문대학",
        NaturalSciences => "자연과학대학",
        Arts => "예술대학",
    }
}

impl College {
    /// Majors selectable under this college.
    pub fn majors(&self) -> &'static [Major] {
        use Major::*;
        match self {
            College::Engineering => &[
                ComputerEngineering,
                ElectronicEngineering,
                MechanicalEngineering,
                Architecture,
                ChemicalEngineering,
            ],
            College::Business => &[
                BusinessAdministration,
                Accounting,
                InternationalBusiness,
                Marketing,
            ],
            College::SocialSciences => &[
                Psychology,
                Sociology,
                PoliticalScience,
                MediaCommunication,
            ],
            College::Humanities => &[KoreanLiterature, EnglishLiterature, Philosophy, History],
            College::NaturalSciences => &[Mathematics, Physics, Chemistry, LifeScience],
            College::Arts => &[VisualDesign, IndustrialDesign, FineArts, Music],
        }
    }

    pub fn offers(&self, major: Major) -> bool {
        self.majors().contains(&major)
    }
}

labeled_enum! {
    pub enum Major {
        ComputerEngineering => "컴퓨터공학과",
        ElectronicEngineering => "전자공학과",
        MechanicalEngineering => "기계공학과",
        Architecture => "건축학과",
        ChemicalEngineering => "화학공학과",
        BusinessAdministration => "경영학과",
        Accounting => "회계학과",
        InternationalBusiness => "국제경영학과",
        Marketing => "마케팅학과",
        Psychology => "심리학과",
        Sociology => "사회학과",
        PoliticalScience => "정치외교학과",
        MediaCommunication => "미디어커뮤니케이션학과",
        KoreanLiterature => "국어국문학과",
        EnglishLiterature => "영어영문학과",
        Philosophy => "철학과",
        History => "사학과",
        Mathematics => "수학과",
        Physics => "물리학과",
        Chemistry => "화학과",
        LifeScience => "생명과학과",
        VisualDesign => "시각디자인학과",
        IndustrialDesign => "산업디자인학과",
        FineArts => "미술학과",
        Music => "음악학과",
    }
}

impl Major {
    /// The college this major belongs to.
    pub fn college(&self) -> College {
        College::ALL
            .iter()
            .copied()
            .find(|college| college.offers(*self))
            .unwrap_or(College::Engineering)
    }
}

labeled_enum! {
    /// Interest tags a student can list on a profile (1 to 3 of them).
    pub enum Interest {
        Planning => "기획",
        Development => "개발",
        Design => "디자인",
        DataAnalysis => "데이터 분석",
        Marketing => "마케팅",
        VideoProduction => "영상제작",
        Writing => "글쓰기",
        Research => "리서치",
    }
}

labeled_enum! {
    /// Kinds of team activity a student can opt into.
    pub enum Activity {
        Contest => "공모전",
        External => "대외활동",
        Startup => "창업",
        Study => "스터디",
        Project => "프로젝트",
    }
}
