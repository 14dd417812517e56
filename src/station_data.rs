// Station directory for the TGVmax network
// Coordinates and thematic metadata for every station the free-fare catalog
// exposes. Loaded once at startup, immutable afterwards.
//
// SNCF Open Data portal: https://ressources.data.sncf.com/

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Thematic Classification
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    Plage,
    Montagne,
    ParcAttraction,
    Etranger,
}

impl DestinationType {
    pub fn all() -> &'static [DestinationType] {
        &[
            DestinationType::Plage,
            DestinationType::Montagne,
            DestinationType::ParcAttraction,
            DestinationType::Etranger,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DestinationType::Plage => "🏖️ Plages",
            DestinationType::Montagne => "⛰️ Montagnes",
            DestinationType::ParcAttraction => "🎢 Parcs d'Attraction",
            DestinationType::Etranger => "🌍 Étranger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionType {
    IleDeFrance,
    Bretagne,
    Paca,
    Occitanie,
    NouvelleAquitaine,
    AuvergneRhoneAlpes,
    GrandEst,
    HautsDeFrance,
    BourgogneFrancheComte,
    CentreValDeLoire,
    Normandie,
    PaysDeLaLoire,
    International,
}

impl RegionType {
    pub fn all() -> &'static [RegionType] {
        &[
            RegionType::IleDeFrance,
            RegionType::Bretagne,
            RegionType::Paca,
            RegionType::Occitanie,
            RegionType::NouvelleAquitaine,
            RegionType::AuvergneRhoneAlpes,
            RegionType::GrandEst,
            RegionType::HautsDeFrance,
            RegionType::BourgogneFrancheComte,
            RegionType::CentreValDeLoire,
            RegionType::Normandie,
            RegionType::PaysDeLaLoire,
            RegionType::International,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegionType::IleDeFrance => "Île-de-France",
            RegionType::Bretagne => "Bretagne",
            RegionType::Paca => "PACA",
            RegionType::Occitanie => "Occitanie",
            RegionType::NouvelleAquitaine => "Nouvelle-Aquitaine",
            RegionType::AuvergneRhoneAlpes => "Auvergne-Rhône-Alpes",
            RegionType::GrandEst => "Grand Est",
            RegionType::HautsDeFrance => "Hauts-de-France",
            RegionType::BourgogneFrancheComte => "Bourgogne-Franche-Comté",
            RegionType::CentreValDeLoire => "Centre-Val de Loire",
            RegionType::Normandie => "Normandie",
            RegionType::PaysDeLaLoire => "Pays de la Loire",
            RegionType::International => "International",
        }
    }
}

// ============================================================================
// Coordinates & Metadata
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

// Fallback for stations the directory does not know (center of France)
pub const FRANCE_CENTER: Coordinates = Coordinates {
    lat: 46.227638,
    lng: 2.213749,
};

#[derive(Debug, Clone)]
pub struct StationMetadata {
    pub category: Option<DestinationType>,
    pub region: RegionType,
    pub tags: &'static [&'static str],
    pub description: Option<&'static str>,
}

// ============================================================================
// Static Tables
// ============================================================================

// Approximate coordinates of the TGVmax stations (name as published upstream)
const STATION_COORDINATES: &[(&str, f64, f64)] = &[
    ("PARIS (intramuros)", 48.856614, 2.3522219),
    ("LYON (intramuros)", 45.760596, 4.859409),
    ("BORDEAUX ST JEAN", 44.825932, -0.569716),
    ("MARSEILLE ST CHARLES", 43.302666, 5.380407),
    ("RENNES", 48.103754, -1.672874),
    ("POITIERS", 46.580224, 0.340375),
    ("NANTES", 47.217271, -1.542198),
    ("AVIGNON TGV", 43.921684, 4.786255),
    ("LILLE (intramuros)", 50.636, 3.070),
    ("TOURS", 47.394, 0.689),
    ("ANGERS SAINT LAUD", 47.465, -0.556),
    ("LE MANS", 48.007, 0.194),
    ("ANGOULEME", 45.654, 0.159),
    ("NIORT", 46.323, -0.459),
    ("LA ROCHELLE VILLE", 46.158, -1.151),
    ("CHATELLERAULT", 46.816, 0.546),
    ("ST PIERRE DES CORPS", 47.387, 0.748),
    ("VALENCE TGV", 44.982, 4.785),
    ("MONTPELLIER SUD DE FRANCE", 43.596, 3.921),
    ("AVIGNON CENTRE", 43.944, 4.805),
    ("ORANGE", 44.136, 4.808),
    ("VALENCE VILLE", 44.930, 4.892),
    ("NIMES PONT DU GARD", 43.836, 4.360),
    ("ARRAS", 50.291, 2.782),
    ("DOUAI", 50.378, 3.078),
    ("VALENCIENNES", 50.354, 3.521),
    ("LENS", 50.433, 2.832),
    ("BETHUNE", 50.525, 2.640),
    ("HAZEBROUCK", 50.725, 2.540),
    ("ROUBAIX", 50.691, 3.174),
    ("TOURCOING", 50.723, 3.161),
    ("CROIX WASQUEHAL", 50.670, 3.145),
    ("DUNKERQUE", 51.034, 2.376),
    ("NANCY", 48.687, 6.176),
    ("EPINAL", 48.175, 6.449),
    ("REMIREMONT", 48.017, 6.590),
    ("REIMS", 49.259, 4.027),
    ("STRASBOURG", 48.584, 7.735),
    ("METZ", 49.109, 6.176),
    ("GRENOBLE", 45.191, 5.714),
    ("CHAMBERY CHALLES LES EAUX", 45.564, 5.918),
    ("ANNECY", 45.901, 6.129),
    ("AIX LES BAINS LE REVARD", 45.690, 5.915),
    ("BOURG EN BRESSE", 46.205, 5.226),
    ("MACON LOCHE TGV", 46.297, 4.777),
    ("LYON ST EXUPERY TGV.", 45.724, 5.091),
    ("LE CREUSOT MONTCEAU MONTCHANIN", 46.796, 4.416),
    ("SAINT ETIENNE CHATEAUCREUX", 45.441, 4.403),
    ("CLERMONT FERRAND", 45.776, 3.103),
    ("VICHY", 46.126, 3.422),
    ("MOULINS SUR ALLIER", 46.563, 3.334),
    ("NEVERS", 46.989, 3.161),
    ("RIOM CHATEL GUYON", 45.888, 3.112),
    ("LIMOGES BENEDICTINS", 45.836, 1.279),
    ("BRIVE LA GAILLARDE", 45.153, 1.531),
    ("CAHORS", 44.445, 1.441),
    ("MONTAUBAN VILLE BOURBON", 44.018, 1.354),
    ("AGEN", 44.203, 0.616),
    ("TOULOUSE MATABIAU", 43.611, 1.453),
    ("ARCACHON", 44.661, -1.166),
    ("LA TESTE", 44.630, -1.139),
    ("BIGANOS FACTURE", 44.642, -0.967),
    ("LIBOURNE", 44.918, -0.242),
    ("SURGERES", 46.108, -0.755),
    ("SAINTES", 45.743, -0.629),
    ("ROYAN", 45.625, -1.029),
    ("JONZAC", 45.447, -0.434),
    ("ST NAZAIRE", 47.287, -2.213),
    ("LE CROISIC", 47.293, -2.513),
    ("LA BAULE ESCOUBLAC", 47.287, -2.391),
    ("LE POULIGUEN", 47.272, -2.431),
    ("PORNICHET", 47.260, -2.339),
    ("NICE VILLE", 43.705, 7.262),
    ("CANNES", 43.551, 7.019),
    ("ANTIBES", 43.581, 7.124),
    ("ST RAPHAEL VALESCURE", 43.424, 6.770),
    ("TOULON", 43.124, 5.926),
    ("AIX EN PROVENCE TGV", 43.455, 5.317),
    ("CHATEAUROUX", 46.813, 1.693),
    ("ARGENTON SUR CREUSE", 46.588, 1.519),
    ("LA SOUTERRAINE", 46.233, 1.488),
    ("VIERZON", 47.223, 2.067),
    ("VENDOME VILLIERS SUR LOIR", 47.793, 1.069),
    ("FUTUROSCOPE", 46.671, 0.373),
    ("ST MAIXENT (DEUX SEVRES)", 46.410, -0.204),
    ("MONTELIMAR GARE SNCF", 44.558, 4.751),
    ("ST MICHEL VALLOIRE", 45.230, 6.466),
    ("SAINT AVRE LA CHAMBRE", 45.393, 6.380),
    ("ST JEAN DE MAURIENNE ARVAN", 45.276, 6.345),
    ("MODANE", 45.201, 6.654),
    ("BELLEGARDE SUR VALSERINE GARE", 46.107, 5.826),
    ("OFFENBURG", 48.473, 7.942),
    ("RINGSHEIM EUROPA PARK", 48.268, 7.735),
    ("LAHR SCHWARZW", 48.339, 7.874),
    ("FREIBURG (BREISGAU) HBF", 47.997, 7.840),
];

// Thematic classification of the TGVmax destinations
const STATION_CATEGORIES: &[(
    &str,
    Option<DestinationType>,
    RegionType,
    &[&str],
    Option<&str>,
)] = &[
    // 🏖️ Plages
    ("AGDE", Some(DestinationType::Plage), RegionType::Occitanie, &["méditerranée"], Some("Station balnéaire (14km de la côte)")),
    ("AIX EN PROVENCE TGV", Some(DestinationType::Plage), RegionType::Paca, &["méditerranée"], Some("Station balnéaire (19km de la côte)")),
    ("ANTIBES", Some(DestinationType::Plage), RegionType::Paca, &["méditerranée"], Some("Station balnéaire (19km de la côte)")),
    ("BAYONNE", Some(DestinationType::Plage), RegionType::NouvelleAquitaine, &[], Some("Station balnéaire (2km de la côte)")),
    ("BEZIERS", Some(DestinationType::Plage), RegionType::Occitanie, &["méditerranée"], Some("Station balnéaire (8km de la côte)")),
    ("BIARRITZ", Some(DestinationType::Plage), RegionType::NouvelleAquitaine, &[], Some("Station balnéaire (6km de la côte)")),
    ("BREST", Some(DestinationType::Plage), RegionType::Bretagne, &["atlantique"], Some("Station balnéaire (2km de la côte)")),
    ("CANNES", Some(DestinationType::Plage), RegionType::Paca, &["méditerranée"], Some("Station balnéaire (11km de la côte)")),
    ("DOL DE BRETAGNE", Some(DestinationType::Plage), RegionType::Bretagne, &["atlantique"], Some("Station balnéaire (19km de la côte)")),
    ("HENDAYE", Some(DestinationType::Plage), RegionType::NouvelleAquitaine, &[], Some("Station balnéaire (28km de la côte)")),
    ("LA BAULE ESCOUBLAC", Some(DestinationType::Plage), RegionType::PaysDeLaLoire, &["atlantique"], Some("Station balnéaire (17km de la côte)")),
    ("LA ROCHELLE VILLE", Some(DestinationType::Plage), RegionType::NouvelleAquitaine, &["atlantique"], Some("Station balnéaire (7km de la côte)")),
    ("LE CROISIC", Some(DestinationType::Plage), RegionType::PaysDeLaLoire, &["atlantique"], Some("Station balnéaire (26km de la côte)")),
    ("LE POULIGUEN", Some(DestinationType::Plage), RegionType::PaysDeLaLoire, &["atlantique"], Some("Station balnéaire (19km de la côte)")),
    ("LORIENT", Some(DestinationType::Plage), RegionType::Bretagne, &["atlantique"], Some("Station balnéaire (7km de la côte)")),
    ("LUCON", Some(DestinationType::Plage), RegionType::NouvelleAquitaine, &["atlantique"], Some("Station balnéaire (28km de la côte)")),
    ("MAGALAS", Some(DestinationType::Plage), RegionType::Occitanie, &["méditerranée"], Some("Station balnéaire (20km de la côte)")),
    ("MARSEILLE ST CHARLES", Some(DestinationType::Plage), RegionType::Paca, &["méditerranée"], Some("Station balnéaire (2km de la côte)")),
    ("NARBONNE", Some(DestinationType::Plage), RegionType::Occitanie, &["méditerranée"], Some("Station balnéaire (26km de la côte)")),
    ("NICE VILLE", Some(DestinationType::Plage), RegionType::Paca, &["méditerranée"], Some("Station balnéaire (3km de la côte)")),
    ("PERPIGNAN", Some(DestinationType::Plage), RegionType::Occitanie, &[], Some("Station balnéaire (2km de la côte)")),
    ("PORNICHET", Some(DestinationType::Plage), RegionType::PaysDeLaLoire, &["atlantique"], Some("Station balnéaire (12km de la côte)")),
    ("QUIMPERLE", Some(DestinationType::Plage), RegionType::Bretagne, &["atlantique"], Some("Station balnéaire (22km de la côte)")),
    ("ST JEAN DE LUZ CIBOURE", Some(DestinationType::Plage), RegionType::NouvelleAquitaine, &[], Some("Station balnéaire (18km de la côte)")),
    ("ST MALO", Some(DestinationType::Plage), RegionType::Bretagne, &["atlantique"], Some("Station balnéaire (5km de la côte)")),
    ("ST NAZAIRE", Some(DestinationType::Plage), RegionType::PaysDeLaLoire, &["atlantique"], Some("Station balnéaire (10km de la côte)")),
    ("ST RAPHAEL VALESCURE", Some(DestinationType::Plage), RegionType::Paca, &["méditerranée"], Some("Station balnéaire (14km de la côte)")),
    ("TOULON", Some(DestinationType::Plage), RegionType::Paca, &["méditerranée"], Some("Station balnéaire (4km de la côte)")),
    // ⛰️ Montagnes
    ("AIX LES BAINS LE REVARD", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["alpes", "ski"], Some("Station de montagne (6km d'un massif)")),
    ("ANNECY", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["alpes", "lac"], Some("Station de montagne (2km d'un massif)")),
    ("ARVANT", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central", "volcans"], Some("Station de montagne (33km d'un massif)")),
    ("AUMONT AUBRAC", Some(DestinationType::Montagne), RegionType::Occitanie, &["massif central"], Some("Station de montagne (50km d'un massif)")),
    ("BELFORT MONTBELIARD TGV", Some(DestinationType::Montagne), RegionType::GrandEst, &["vosges", "ski"], Some("Station de montagne (44km d'un massif)")),
    ("BRASSAC LES MINES STE FLORINE", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central", "volcans"], Some("Station de montagne (45km d'un massif)")),
    ("CHAMBERY CHALLES LES EAUX", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["alpes", "ski"], Some("Station de montagne (8km d'un massif)")),
    ("CLERMONT FERRAND", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central", "volcans"], Some("Station de montagne (1km d'un massif)")),
    ("COLMAR", Some(DestinationType::Montagne), RegionType::GrandEst, &["vosges", "ski"], Some("Station de montagne (26km d'un massif)")),
    ("EPINAL", Some(DestinationType::Montagne), RegionType::GrandEst, &["vosges", "ski"], Some("Station de montagne (38km d'un massif)")),
    ("FRASNE", Some(DestinationType::Montagne), RegionType::BourgogneFrancheComte, &["jura", "ski de fond"], Some("Station de montagne (10km d'un massif)")),
    ("GRENOBLE", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["alpes", "ski"], Some("Station de montagne (1km d'un massif)")),
    ("ISSOIRE", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central", "volcans"], Some("Station de montagne (27km d'un massif)")),
    ("LANNEMEZAN", Some(DestinationType::Montagne), RegionType::Occitanie, &["pyrénées", "ski"], Some("Station de montagne (36km d'un massif)")),
    ("LOURDES", Some(DestinationType::Montagne), RegionType::Occitanie, &["pyrénées"], Some("Station de montagne (17km d'un massif)")),
    ("MODANE", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["alpes", "ski"], Some("Station de montagne (4km d'un massif)")),
    ("MONTELIMAR GARE SNCF", Some(DestinationType::Montagne), RegionType::Paca, &["massif central"], Some("Station de montagne (50km d'un massif)")),
    ("MOUCHARD", Some(DestinationType::Montagne), RegionType::BourgogneFrancheComte, &["jura"], Some("Station de montagne (31km d'un massif)")),
    ("MULHOUSE VILLE", Some(DestinationType::Montagne), RegionType::GrandEst, &["vosges", "ski"], Some("Station de montagne (44km d'un massif)")),
    ("NEUSSARGUES", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central"], Some("Station de montagne (11km d'un massif)")),
    ("PAU", Some(DestinationType::Montagne), RegionType::NouvelleAquitaine, &["pyrénées"], Some("Station de montagne (23km d'un massif)")),
    ("REMIREMONT", Some(DestinationType::Montagne), RegionType::GrandEst, &["vosges", "ski"], Some("Station de montagne (21km d'un massif)")),
    ("RIOM CHATEL GUYON", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central", "volcans"], Some("Station de montagne (13km d'un massif)")),
    ("SAINT CHELY D'APCHER", Some(DestinationType::Montagne), RegionType::Occitanie, &["massif central"], Some("Station de montagne (37km d'un massif)")),
    ("ST FLOUR CHAUDES AIGUES", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central"], Some("Station de montagne (13km d'un massif)")),
    ("ST GAUDENS", Some(DestinationType::Montagne), RegionType::Occitanie, &["pyrénées", "ski"], Some("Station de montagne (27km d'un massif)")),
    ("TARBES", Some(DestinationType::Montagne), RegionType::Occitanie, &["pyrénées"], Some("Station de montagne (30km d'un massif)")),
    ("VALENCE TGV", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central"], Some("Station de montagne (46km d'un massif)")),
    ("VICHY", Some(DestinationType::Montagne), RegionType::AuvergneRhoneAlpes, &["massif central", "volcans"], Some("Station de montagne (47km d'un massif)")),
    // 🎢 Parcs d'attraction
    ("AEROPORT ROISSY CDG 2 TGV", Some(DestinationType::ParcAttraction), RegionType::IleDeFrance, &["parc astérix"], Some("Aéroport et accès Parc Astérix")),
    ("FUTUROSCOPE", Some(DestinationType::ParcAttraction), RegionType::NouvelleAquitaine, &["technologie"], Some("Parc du Futuroscope")),
    ("LA ROCHE SUR YON", Some(DestinationType::ParcAttraction), RegionType::NouvelleAquitaine, &["puy du fou"], Some("Accès au Puy du Fou")),
    ("MARNE LA VALLEE CHESSY", Some(DestinationType::ParcAttraction), RegionType::IleDeFrance, &["disneyland"], Some("Disneyland Paris")),
    // 🌍 International
    ("BRUXELLES MIDI", Some(DestinationType::Etranger), RegionType::International, &["europe"], Some("Destination internationale")),
    // 🏙️ Autres villes
    ("AGEN", None, RegionType::Occitanie, &[], None),
    ("ANGERS SAINT LAUD", None, RegionType::PaysDeLaLoire, &[], None),
    ("ANGOULEME", None, RegionType::NouvelleAquitaine, &[], None),
    ("ARGENTON SUR CREUSE", None, RegionType::NouvelleAquitaine, &[], None),
    ("ARLES", None, RegionType::Paca, &[], None),
    ("ARRAS", None, RegionType::HautsDeFrance, &[], None),
    ("AURAY", None, RegionType::Bretagne, &[], None),
    ("AVIGNON CENTRE", None, RegionType::Paca, &[], None),
    ("AVIGNON TGV", None, RegionType::Paca, &[], None),
    ("BANASSAC LA CANOURGUE", None, RegionType::Occitanie, &[], None),
    ("BEAUNE", None, RegionType::BourgogneFrancheComte, &[], None),
    ("BEDARIEUX", None, RegionType::Occitanie, &[], None),
    ("BESANCON FRANCHE COMTE TGV", None, RegionType::BourgogneFrancheComte, &[], None),
    ("BORDEAUX ST JEAN", None, RegionType::NouvelleAquitaine, &[], None),
    ("BOURG EN BRESSE", None, RegionType::AuvergneRhoneAlpes, &[], None),
    ("BOURGES", None, RegionType::CentreValDeLoire, &[], None),
    ("BRIVE LA GAILLARDE", None, RegionType::NouvelleAquitaine, &[], None),
    ("CAHORS", None, RegionType::Occitanie, &[], None),
    ("CAMPAGNAC ST GENIEZ", None, RegionType::Occitanie, &[], None),
    ("CARCASSONNE", None, RegionType::Occitanie, &[], None),
    ("CAUSSADE(TARN ET GARONNE)", None, RegionType::Occitanie, &[], None),
    ("CEILHES ROQUEREDONDE", None, RegionType::Occitanie, &[], None),
    ("CHALON SUR SAONE", None, RegionType::BourgogneFrancheComte, &[], None),
    ("CHAMPAGNE ARDENNE TGV", None, RegionType::HautsDeFrance, &[], None),
    ("CHATEAUROUX", None, RegionType::CentreValDeLoire, &[], None),
    ("CHATELLERAULT", None, RegionType::CentreValDeLoire, &[], None),
    ("COMMERCY", None, RegionType::GrandEst, &[], None),
    ("CULMONT CHALINDREY", None, RegionType::GrandEst, &[], None),
    ("DAX", None, RegionType::NouvelleAquitaine, &[], None),
    ("DIJON VILLE", None, RegionType::BourgogneFrancheComte, &[], None),
    ("DOUAI", None, RegionType::HautsDeFrance, &[], None),
    ("DUNKERQUE", None, RegionType::HautsDeFrance, &[], None),
    ("FRESNES AU MONT", None, RegionType::GrandEst, &[], None),
    ("GOURDON", None, RegionType::Occitanie, &[], None),
    ("GUINGAMP", None, RegionType::Bretagne, &[], None),
    ("LA SOUTERRAINE", None, RegionType::NouvelleAquitaine, &[], None),
    ("LAVAL", None, RegionType::PaysDeLaLoire, &[], None),
    ("LE BOUSQUET D'ORB", None, RegionType::Occitanie, &[], None),
    ("LE CREUSOT MONTCEAU MONTCHANIN", None, RegionType::BourgogneFrancheComte, &[], None),
    ("LE MANS", None, RegionType::CentreValDeLoire, &[], None),
    ("LEROUVILLE CENTRE", None, RegionType::GrandEst, &[], None),
    ("LES ARCS DRAGUIGNAN", None, RegionType::Paca, &[], None),
    ("LES AUBRAIS ORLEANS", None, RegionType::CentreValDeLoire, &[], None),
    ("LILLE (intramuros)", None, RegionType::HautsDeFrance, &[], None),
    ("LIMOGES BENEDICTINS", None, RegionType::NouvelleAquitaine, &[], None),
    ("LORRAINE TGV", None, RegionType::GrandEst, &[], None),
    ("LYON (intramuros)", None, RegionType::AuvergneRhoneAlpes, &[], None),
    ("LYON ST EXUPERY TGV.", None, RegionType::AuvergneRhoneAlpes, &[], None),
    ("MACON LOCHE TGV", None, RegionType::AuvergneRhoneAlpes, &[], None),
    ("MACON VILLE", None, RegionType::AuvergneRhoneAlpes, &[], None),
    ("MARMANDE", None, RegionType::Occitanie, &[], None),
    ("MARVEJOLS", None, RegionType::Occitanie, &[], None),
    ("MASSY TGV", None, RegionType::IleDeFrance, &[], None),
    ("METZ VILLE", None, RegionType::GrandEst, &[], None),
    ("MEUSE TGV", None, RegionType::GrandEst, &[], None),
    ("MILLAU", None, RegionType::Occitanie, &[], None),
    ("MIRAMAS", None, RegionType::Paca, &[], None),
    ("MONTAUBAN VILLE BOURBON", None, RegionType::Occitanie, &[], None),
    ("MONTPELLIER SAINT ROCH", None, RegionType::Occitanie, &[], None),
    ("MONTPELLIER SUD DE FRANCE", None, RegionType::Occitanie, &[], None),
    ("MORLAIX", None, RegionType::Bretagne, &[], None),
    ("MOULINS SUR ALLIER", None, RegionType::BourgogneFrancheComte, &[], None),
    ("NANCY", None, RegionType::GrandEst, &[], None),
    ("NANTES", None, RegionType::PaysDeLaLoire, &[], None),
    ("NEUFCHATEAU", None, RegionType::GrandEst, &[], None),
    ("NEVERS", None, RegionType::BourgogneFrancheComte, &[], None),
    ("NIMES CENTRE", None, RegionType::Paca, &[], None),
    ("NIMES PONT DU GARD", None, RegionType::Paca, &[], None),
    ("NIORT", None, RegionType::NouvelleAquitaine, &[], None),
    ("ORTHEZ", None, RegionType::NouvelleAquitaine, &[], None),
    ("PARIS (intramuros)", None, RegionType::IleDeFrance, &[], None),
    ("POITIERS", None, RegionType::NouvelleAquitaine, &[], None),
    ("QUIMPER", None, RegionType::Bretagne, &[], None),
    ("REIMS", None, RegionType::HautsDeFrance, &[], None),
    ("RENNES", None, RegionType::Bretagne, &[], None),
    ("RETHEL", None, RegionType::GrandEst, &[], None),
    ("ROANNE", None, RegionType::AuvergneRhoneAlpes, &[], None),
    ("ROCHEFORT", None, RegionType::NouvelleAquitaine, &[], None),
    ("ROSPORDEN", None, RegionType::Bretagne, &[], None),
    ("SABLE SUR SARTHE", None, RegionType::PaysDeLaLoire, &[], None),
    ("SAINT ETIENNE CHATEAUCREUX", None, RegionType::AuvergneRhoneAlpes, &[], None),
    ("SAINT GEORGES DE LUZENCON", None, RegionType::Occitanie, &[], None),
    ("SAINT GERMAIN DES FOSSES", None, RegionType::AuvergneRhoneAlpes, &[], None),
    ("SAINT ROME DE CERNON", None, RegionType::Occitanie, &[], None),
    ("SAINTES", None, RegionType::NouvelleAquitaine, &[], None),
    ("SAUMUR", None, RegionType::PaysDeLaLoire, &[], None),
    ("SETE", None, RegionType::Occitanie, &[], None),
    ("SEVERAC LE CHATEAU", None, RegionType::Occitanie, &[], None),
    ("SOUILLAC", None, RegionType::Occitanie, &[], None),
    ("ST BRIEUC", None, RegionType::Bretagne, &[], None),
    ("ST MAIXENT (DEUX SEVRES)", None, RegionType::NouvelleAquitaine, &[], None),
    ("ST PIERRE DES CORPS", None, RegionType::CentreValDeLoire, &[], None),
    ("STRASBOURG", None, RegionType::GrandEst, &[], None),
    ("SURGERES", None, RegionType::NouvelleAquitaine, &[], None),
    ("TGV HAUTE PICARDIE", None, RegionType::HautsDeFrance, &[], None),
    ("THIONVILLE", None, RegionType::GrandEst, &[], None),
    ("TOUL", None, RegionType::GrandEst, &[], None),
    ("TOULOUSE MATABIAU", None, RegionType::Occitanie, &[], None),
    ("TOURNEMIRE ROQUEFORT", None, RegionType::Occitanie, &[], None),
    ("TOURS", None, RegionType::CentreValDeLoire, &[], None),
    ("UZERCHE", None, RegionType::NouvelleAquitaine, &[], None),
    ("VALENCIENNES", None, RegionType::HautsDeFrance, &[], None),
    ("VANNES", None, RegionType::Bretagne, &[], None),
    ("VENDOME VILLIERS SUR LOIR", None, RegionType::CentreValDeLoire, &[], None),
    ("VERDUN", None, RegionType::GrandEst, &[], None),
    ("VIERZON", None, RegionType::CentreValDeLoire, &[], None),
];

// ============================================================================
// Directory
// ============================================================================

pub struct StationDirectory {
    coordinates: HashMap<&'static str, Coordinates>,
    metadata: HashMap<&'static str, StationMetadata>,
}

impl StationDirectory {
    pub fn new() -> Self {
        let coordinates = STATION_COORDINATES
            .iter()
            .map(|&(name, lat, lng)| (name, Coordinates { lat, lng }))
            .collect();

        let metadata = STATION_CATEGORIES
            .iter()
            .map(|&(name, category, region, tags, description)| {
                (
                    name,
                    StationMetadata {
                        category,
                        region,
                        tags,
                        description,
                    },
                )
            })
            .collect();

        StationDirectory {
            coordinates,
            metadata,
        }
    }

    pub fn coordinates_for(&self, name: &str) -> Option<Coordinates> {
        self.coordinates.get(name).copied()
    }

    // Directory lookup with the center-of-France fallback
    pub fn coordinates_or_default(&self, name: &str) -> Coordinates {
        self.coordinates_for(name).unwrap_or(FRANCE_CENTER)
    }

    pub fn metadata_for(&self, name: &str) -> Option<&StationMetadata> {
        self.metadata.get(name)
    }

    pub fn coordinate_count(&self) -> usize {
        self.coordinates.len()
    }

    pub fn metadata_count(&self) -> usize {
        self.metadata.len()
    }
}

impl Default for StationDirectory {
    fn default() -> Self {
        Self::new()
    }
}
