//! The fixed list of species a build resolves, in output order.

/// A species to look up: its scientific name and the name shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedEntry {
    pub scientific_name: &'static str,
    pub display_name: &'static str,
}

impl SeedEntry {
    pub const fn new(scientific_name: &'static str, display_name: &'static str) -> Self {
        Self {
            scientific_name,
            display_name,
        }
    }
}

pub const SEED: &[SeedEntry] = &[
    SeedEntry::new("Homo sapiens", "Humano"),
    SeedEntry::new("Pan troglodytes", "Chimpancé"),
    SeedEntry::new("Gorilla gorilla", "Gorila occidental"),
    SeedEntry::new("Panthera leo", "León"),
    SeedEntry::new("Panthera tigris", "Tigre"),
    SeedEntry::new("Panthera pardus", "Leopardo"),
    SeedEntry::new("Panthera onca", "Jaguar"),
    SeedEntry::new("Acinonyx jubatus", "Guepardo"),
    SeedEntry::new("Ailuropoda melanoleuca", "Panda gigante"),
    SeedEntry::new("Ursus arctos", "Oso pardo"),
    SeedEntry::new("Ursus maritimus", "Oso polar"),
    SeedEntry::new("Canis lupus", "Lobo"),
    SeedEntry::new("Vulpes vulpes", "Zorro rojo"),
    SeedEntry::new("Felis catus", "Gato doméstico"),
    SeedEntry::new("Loxodonta africana", "Elefante africano"),
    SeedEntry::new("Elephas maximus", "Elefante asiático"),
    SeedEntry::new("Giraffa camelopardalis", "Jirafa"),
    SeedEntry::new("Hippopotamus amphibius", "Hipopótamo"),
    SeedEntry::new("Equus ferus", "Caballo"),
    SeedEntry::new("Equus zebra", "Cebra"),
    SeedEntry::new("Sus scrofa", "Jabalí"),
    SeedEntry::new("Bos taurus", "Vaca"),
    SeedEntry::new("Ovis aries", "Oveja"),
    SeedEntry::new("Capra pyrenaica", "Cabra montés ibérica"),
    SeedEntry::new("Camelus dromedarius", "Dromedario"),
    SeedEntry::new("Delphinus delphis", "Delfín común"),
    SeedEntry::new("Orcinus orca", "Orca"),
    SeedEntry::new("Balaenoptera musculus", "Ballena azul"),
    SeedEntry::new("Megaptera novaeangliae", "Ballena jorobada"),
    SeedEntry::new("Monodon monoceros", "Narval"),
    SeedEntry::new("Carcharodon carcharias", "Tiburón blanco"),
    SeedEntry::new("Rhincodon typus", "Tiburón ballena"),
    SeedEntry::new("Sphyrna zygaena", "Tiburón martillo"),
    SeedEntry::new("Chelonia mydas", "Tortuga verde"),
    SeedEntry::new("Dermochelys coriacea", "Tortuga laúd"),
    SeedEntry::new("Crocodylus niloticus", "Cocodrilo del Nilo"),
    SeedEntry::new("Alligator mississippiensis", "Aligátor americano"),
    SeedEntry::new("Varanus komodoensis", "Dragón de Komodo"),
    SeedEntry::new("Iguana iguana", "Iguana verde"),
    SeedEntry::new("Ophiophagus hannah", "Cobra real"),
    SeedEntry::new("Falco peregrinus", "Halcón peregrino"),
    SeedEntry::new("Aquila chrysaetos", "Águila real"),
    SeedEntry::new("Struthio camelus", "Avestruz"),
    SeedEntry::new("Pavo cristatus", "Pavo real"),
    SeedEntry::new("Corvus corax", "Cuervo grande"),
    SeedEntry::new("Gyps fulvus", "Buitre leonado"),
    SeedEntry::new("Aptenodytes forsteri", "Pingüino emperador"),
    SeedEntry::new("Cygnus olor", "Cisne blanco"),
    SeedEntry::new("Anas platyrhynchos", "Ánade real"),
    SeedEntry::new("Passer domesticus", "Gorrión común"),
    SeedEntry::new("Pelophylax perezi", "Rana común"),
    SeedEntry::new("Salamandra salamandra", "Salamandra común"),
    SeedEntry::new("Ambystoma mexicanum", "Ajolote"),
    SeedEntry::new("Phoca vitulina", "Foca común"),
    SeedEntry::new("Otaria flavescens", "León marino sudamericano"),
    SeedEntry::new("Odobenus rosmarus", "Morsa"),
    SeedEntry::new("Macropus rufus", "Canguro rojo"),
    SeedEntry::new("Phascolarctos cinereus", "Koala"),
    SeedEntry::new("Ornithorhynchus anatinus", "Ornitorrinco"),
    SeedEntry::new("Tachyglossus aculeatus", "Equidna"),
    SeedEntry::new("Rattus norvegicus", "Rata parda"),
    SeedEntry::new("Mus musculus", "Ratón de laboratorio"),
    SeedEntry::new("Mustela nivalis", "Comadreja"),
    SeedEntry::new("Rhinoceros unicornis", "Rinoceronte indio"),
    SeedEntry::new("Diceros bicornis", "Rinoceronte negro"),
    SeedEntry::new("Gavialis gangeticus", "Gavial"),
    SeedEntry::new("Columba livia", "Paloma bravía"),
    SeedEntry::new("Tyto alba", "Lechuza común"),
    SeedEntry::new("Pelecanus onocrotalus", "Pelícano blanco"),
    SeedEntry::new("Ara macao", "Guacamayo rojo"),
    SeedEntry::new("Myiopsitta monachus", "Cotorra argentina"),
    SeedEntry::new("Phoenicopterus roseus", "Flamenco rosado"),
    SeedEntry::new("Danaus plexippus", "Mariposa monarca"),
    SeedEntry::new("Apis mellifera", "Abeja europea"),
    SeedEntry::new("Atta cephalotes", "Hormiga cortadora de hojas"),
    SeedEntry::new("Latrodectus mactans", "Viuda negra"),
    SeedEntry::new("Lycosa tarantula", "Tarántula europea"),
    SeedEntry::new("Buthus occitanus", "Escorpión"),
    SeedEntry::new("Carcinus maenas", "Cangrejo verde"),
    SeedEntry::new("Palinurus elephas", "Langosta europea"),
    SeedEntry::new("Homarus americanus", "Bogavante americano"),
    SeedEntry::new("Octopus vulgaris", "Pulpo común"),
    SeedEntry::new("Architeuthis dux", "Calamar gigante"),
    SeedEntry::new("Nautilus pompilius", "Nautilo"),
    SeedEntry::new("Aplysia californica", "Liebre de mar"),
    SeedEntry::new("Electrophorus electricus", "Anguila eléctrica"),
    SeedEntry::new("Limulus polyphemus", "Cangrejo herradura"),
    SeedEntry::new("Salmo salar", "Salmón común"),
    SeedEntry::new("Physalia physalis", "Carabela portuguesa"),
    SeedEntry::new("Hydra vulgaris", "Hidra"),
    SeedEntry::new("Nematostella vectensis", "Anémona estrella"),
    SeedEntry::new("Acanthaster planci", "Estrella corona de espinas"),
    SeedEntry::new("Strongylocentrotus purpuratus", "Erizo púrpura"),
    SeedEntry::new("Paracentrotus lividus", "Erizo de mar común"),
    SeedEntry::new("Holothuria forskali", "Pepino de mar"),
    SeedEntry::new("Eucidaris tribuloides", "Erizo lápiz"),
    SeedEntry::new("Euplectella aspergillum", "Esponja Venus"),
    SeedEntry::new("Spongia officinalis", "Esponja de baño"),
    SeedEntry::new("Sabella spallanzanii", "Gusano pluma"),
    SeedEntry::new("Platynereis dumerilii", "Gusano poliqueto"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_size_and_order() {
        assert_eq!(SEED.len(), 100);
        assert_eq!(SEED[0], SeedEntry::new("Homo sapiens", "Humano"));
        assert_eq!(
            SEED.last().map(|s| s.scientific_name),
            Some("Platynereis dumerilii")
        );
    }

    #[test]
    fn test_seed_entries_are_populated() {
        for entry in SEED {
            assert!(!entry.scientific_name.trim().is_empty());
            assert!(!entry.display_name.trim().is_empty());
            // Binomial names only
            assert_eq!(entry.scientific_name.split_whitespace().count(), 2);
        }
    }

    #[test]
    fn test_display_names_keep_accents() {
        assert!(SEED.iter().any(|s| s.display_name == "Águila real"));
        assert!(SEED.iter().any(|s| s.display_name == "Chimpancé"));
    }
}
