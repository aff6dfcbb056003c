use super::{Breed, BreedSize};

/// Starter breeds a fresh session begins with (ids 1..=3).
pub fn seed_breeds() -> Vec<Breed> {
    vec![
        Breed {
            id: 1,
            name: "Golden Retriever".into(),
            origin: "Scotland".into(),
            size: BreedSize::Large,
            temperament: "Friendly, Intelligent, Devoted".into(),
            life_span: "10-12 years".into(),
            description: "A large-sized gun dog that retrieves shot waterfowl, such as ducks \
                          and upland game birds, during hunting and shooting parties."
                .into(),
        },
        Breed {
            id: 2,
            name: "German Shepherd".into(),
            origin: "Germany".into(),
            size: BreedSize::Large,
            temperament: "Confident, Courageous, Smart".into(),
            life_span: "9-13 years".into(),
            description: "A working dog developed originally for herding sheep. Extremely \
                          versatile, serving as family companion, guard dog, and in military \
                          roles."
                .into(),
        },
        Breed {
            id: 3,
            name: "French Bulldog".into(),
            origin: "France".into(),
            size: BreedSize::Small,
            temperament: "Adaptable, Playful, Smart".into(),
            life_span: "10-12 years".into(),
            description: "A breed of domestic dog, bred to be companion dogs. Despite their \
                          name, they were developed in England and later refined in France."
                .into(),
        },
    ]
}
