//! Sample catalog data. Ids are stable so tests can refer to them
//! directly: artist 1 / classification 1 / art 1 are linked.

use artshop_types::{Art, Artist, ArtistRef, Classification, ClassificationRef};

pub fn artists() -> Vec<Artist> {
    vec![
        Artist {
            id: Some(1),
            first_name: Some("Винсент".into()),
            middle_name: Some("Виллем".into()),
            last_name: Some("Ван Гог".into()),
            artwork_titles: vec!["Звёздная ночь".into()],
        },
        Artist {
            id: Some(2),
            first_name: Some("Клод".into()),
            middle_name: None,
            last_name: Some("Моне".into()),
            artwork_titles: vec!["Впечатление. Восход солнца".into()],
        },
        Artist {
            id: Some(3),
            first_name: Some("Казимир".into()),
            middle_name: None,
            last_name: Some("Малевич".into()),
            artwork_titles: Vec::new(),
        },
    ]
}

pub fn classifications() -> Vec<Classification> {
    vec![
        Classification {
            id: Some(1),
            name: "Живопись".into(),
            description: Some("Масло, холст".into()),
            artwork_titles: vec!["Звёздная ночь".into(), "Впечатление. Восход солнца".into()],
        },
        Classification {
            id: Some(2),
            name: "Графика".into(),
            description: None,
            artwork_titles: Vec::new(),
        },
    ]
}

pub fn arts() -> Vec<Art> {
    vec![
        Art {
            id: Some(1),
            title: "Звёздная ночь".into(),
            year: Some(1889),
            classification: Some(ClassificationRef {
                id: 1,
                name: "Живопись".into(),
                description: "Масло, холст".into(),
            }),
            artists: vec![ArtistRef {
                id: 1,
                first_name: "Винсент".into(),
                last_name: "Ван Гог".into(),
            }],
        },
        Art {
            id: Some(2),
            title: "Впечатление. Восход солнца".into(),
            year: Some(1872),
            classification: Some(ClassificationRef {
                id: 1,
                name: "Живопись".into(),
                description: "Масло, холст".into(),
            }),
            artists: vec![ArtistRef {
                id: 2,
                first_name: "Клод".into(),
                last_name: "Моне".into(),
            }],
        },
    ]
}
