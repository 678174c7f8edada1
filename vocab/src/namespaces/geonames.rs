//! `gn:` namespace: The GeoNames ontology, version 3.1.
//!
//! Feature classes (`A`, `H`, `L`, `P`, `R`, `S`, `T`, `U`, `V`) and the feature
//! codes beneath them (`A.ADM1`, `P.PPLC`, ...), plus the classes and
//! properties of the ontology itself. Feature codes contain a `.`, which maps
//! to `_` in accessor names: [`A_ADM1`] is `gn:A.ADM1`.

use crate::vocabulary;

vocabulary! {
    /// GeoNames ontology.
    pub struct GeoNamesVocabulary;
    prefix = "gn";
    namespace = "http://www.geonames.org/ontology#";
    label = "The Geonames ontology";
    family = Community;
    terms {
        /// The namespace itself, listed as a term of its own.
        NAMESPACE_IRI => "";
        /// country, state, region ...
        A => "A";
        /// first-order administrative division
        ///
        /// a primary administrative division of a country, such as a state in the United States
        A_ADM1 => "A.ADM1";
        /// historical first-order administrative division
        A_ADM1H => "A.ADM1H";
        /// andra ordningens administrativ avdelning
        ///
        /// a subdivision of a first-order administrative division
        A_ADM2 => "A.ADM2";
        /// historical second-order administrative division
        A_ADM2H => "A.ADM2H";
        /// administrativ inndeling av tredje grad
        ///
        /// a subdivision of a second-order administrative division
        A_ADM3 => "A.ADM3";
        /// historical third-order administrative division
        A_ADM3H => "A.ADM3H";
        /// administrativ inndeling av fjerde grad
        ///
        /// a subdivision of a third-order administrative division
        A_ADM4 => "A.ADM4";
        /// historical fourth-order administrative division
        A_ADM4H => "A.ADM4H";
        /// fifth-order administrative division
        ///
        /// a subdivision of a fourth-order administrative division
        A_ADM5 => "A.ADM5";
        /// administrativ avdelning
        ///
        /// an administrative division of a country, undifferentiated as to administrative level
        A_ADMD => "A.ADMD";
        /// historical administrative division
        A_ADMH => "A.ADMH";
        /// leased area
        ///
        /// a tract of land leased to another country, usually for military installations
        A_LTER => "A.LTER";
        /// political entity
        A_PCL => "A.PCL";
        /// avhengig politisk enhet
        A_PCLD => "A.PCLD";
        /// freely associated state
        A_PCLF => "A.PCLF";
        /// historical political entity
        A_PCLH => "A.PCLH";
        /// independent political entity
        A_PCLI => "A.PCLI";
        /// del av oberoende politisk enhet
        A_PCLIX => "A.PCLIX";
        /// delvis oberoende politisk enhet
        A_PCLS => "A.PCLS";
        /// historical capital of a political entity
        A_PPCLH => "A.PPCLH";
        /// historical populated place
        A_PPLH => "A.PPLH";
        /// kommun
        ///
        /// an ecclesiastical district
        A_PRSH => "A.PRSH";
        /// territorium
        A_TERR => "A.TERR";
        /// sone
        A_ZN => "A.ZN";
        /// buffer zone
        ///
        /// a zone recognized as a buffer between two nations in which military presence is
        /// minimal or absent
        A_ZNB => "A.ZNB";
        alternateName => "alternateName";
        /// children features
        ///
        /// Links to an RDF document containing the descriptions of children features
        childrenFeatures => "childrenFeatures";
        /// Class
        ///
        /// A class of features.
        Class => "Class";
        /// Code
        ///
        /// A feature code.
        Code => "Code";
        /// colloquial name
        colloquialName => "colloquialName";
        /// ISO country code
        ///
        /// A two letters country code in the ISO 3166 list
        countryCode => "countryCode";
        /// Feature
        ///
        /// A geographical feature
        Feature => "Feature";
        /// feature class
        ///
        /// The main category of the feature, as defined in geonames taxonomy.
        featureClass => "featureClass";
        /// feature code
        ///
        /// Type of the feature, as defined in geonames taxonomy.
        featureCode => "featureCode";
        /// Geonames Feature
        ///
        /// A feature described in geonames database, uniquely defined by its geonames
        /// identifier
        GeonamesFeature => "GeonamesFeature";
        /// geonames identifier
        geonamesID => "geonamesID";
        /// stream, lake, ...
        H => "H";
        /// landingsområde for sjøfly
        ///
        /// a place on a waterbody where floatplanes land and take off
        H_AIRS => "H.AIRS";
        /// anchorage
        ///
        /// an area where vessels may anchor
        H_ANCH => "H.ANCH";
        /// bay
        ///
        /// a coastal indentation between two capes or headlands, larger than a cove but smaller
        /// than a gulf
        H_BAY => "H.BAY";
        /// bays
        ///
        /// coastal indentations between two capes or headlands, larger than a cove but smaller
        /// than a gulf
        H_BAYS => "H.BAYS";
        /// bight(s)
        ///
        /// an open body of water forming a slight recession in a coastline
        H_BGHT => "H.BGHT";
        /// bank(s)
        ///
        /// an elevation, typically located on a shelf, over which the depth of water is
        /// relatively shallow but sufficient for most surface navigation
        H_BNK => "H.BNK";
        /// elvebredd
        ///
        /// a sloping margin of a stream channel which normally confines the stream to its
        /// channel on land
        H_BNKR => "H.BNKR";
        /// del av bredd
        H_BNKX => "H.BNKX";
        /// bog(s)
        ///
        /// a wetland characterized by peat forming sphagnum moss, sedge, and other acid-water
        /// plants
        H_BOG => "H.BOG";
        /// icecap
        ///
        /// a dome-shaped mass of glacial ice covering an area of  mountain summits or other
        /// high lands; smaller than an ice sheet
        H_CAPG => "H.CAPG";
        /// channel
        ///
        /// the deepest part of a stream, bay, lagoon, or strait, through which the main current
        /// flows
        H_CHN => "H.CHN";
        /// lake channel(s)
        ///
        /// that part of a lake having water deep enough for navigation between islands, shoals,
        /// etc.
        H_CHNL => "H.CHNL";
        /// marine channel
        ///
        /// that part of a body of water deep enough for navigation through an area otherwise
        /// not suitable
        H_CHNM => "H.CHNM";
        /// merket skipsled
        ///
        /// a buoyed channel of sufficient depth for the safe navigation of vessels
        H_CHNN => "H.CHNN";
        /// confluence
        ///
        /// a place where two or more streams or intermittent streams flow together
        H_CNFL => "H.CNFL";
        /// canal
        ///
        /// an artificial watercourse
        H_CNL => "H.CNL";
        /// akvedukt
        ///
        /// a conduit used to carry water
        H_CNLA => "H.CNLA";
        /// canal bend
        ///
        /// a conspicuously curved or bent section of a canal
        H_CNLB => "H.CNLB";
        /// drainage canal
        ///
        /// an artificial waterway carrying water away from a wetland or from drainage ditches
        H_CNLD => "H.CNLD";
        /// bevattningskanal
        ///
        /// a canal which serves as a main conduit for irrigation water
        H_CNLI => "H.CNLI";
        /// navigation canal(s)
        ///
        /// a watercourse constructed for navigation of vessels
        H_CNLN => "H.CNLN";
        /// abandoned canal
        H_CNLQ => "H.CNLQ";
        /// underground irrigation canal(s)
        ///
        /// a gently inclined underground tunnel bringing water for irrigation from aquifers
        H_CNLSB => "H.CNLSB";
        /// del av kanal
        H_CNLX => "H.CNLX";
        /// cove(s)
        ///
        /// a small coastal indentation, smaller than a bay
        H_COVE => "H.COVE";
        /// tidal creek(s)
        ///
        /// a meandering channel in a coastal wetland subject to bi-directional tidal currents
        H_CRKT => "H.CRKT";
        /// current
        ///
        /// a horizontal flow of water in a given direction with uniform velocity
        H_CRNT => "H.CRNT";
        /// avskåret
        ///
        /// a channel formed as a result of a stream cutting through a meander neck
        H_CUTF => "H.CUTF";
        /// dock(s)
        ///
        /// a waterway between two piers, or cut into the land for the berthing of ships
        H_DCK => "H.DCK";
        /// docking basin
        ///
        /// a part of a harbor where ships dock
        H_DCKB => "H.DCKB";
        /// icecap dome
        ///
        /// a comparatively elevated area on an icecap
        H_DOMG => "H.DOMG";
        /// fordypning i iskappen
        ///
        /// a comparatively depressed area on an icecap
        H_DPRG => "H.DPRG";
        /// dike
        ///
        /// a small artificial watercourse dug for draining or irrigating the land
        H_DTCH => "H.DTCH";
        /// drainage ditch
        ///
        /// a ditch which serves to drain the land
        H_DTCHD => "H.DTCHD";
        /// bevattningsdike
        ///
        /// a ditch which serves to distribute irrigation water
        H_DTCHI => "H.DTCHI";
        /// dikesmynning
        ///
        /// an area where a drainage ditch enters a lagoon, lake or bay
        H_DTCHM => "H.DTCHM";
        /// elvemunning
        ///
        /// a funnel-shaped stream mouth or embayment where fresh water mixes with sea water
        /// under tidal influences
        H_ESTY => "H.ESTY";
        /// fishing area
        ///
        /// a fishing ground, bank or area where fishermen go to catch fish
        H_FISH => "H.FISH";
        /// fjord
        ///
        /// a long, narrow, steep-walled, deep-water arm of the sea at high latitudes, usually
        /// along mountainous coasts
        H_FJD => "H.FJD";
        /// fjordar
        ///
        /// long, narrow, steep-walled, deep-water arms of the sea at high latitudes, usually
        /// along mountainous coasts
        H_FJDS => "H.FJDS";
        /// foss
        ///
        /// a perpendicular or very steep descent of the water of a stream
        H_FLLS => "H.FLLS";
        /// del av foss
        H_FLLSX => "H.FLLSX";
        /// mud flat(s)
        ///
        /// a relatively level area of mud either between high and low tide lines, or subject to
        /// flooding
        H_FLTM => "H.FLTM";
        /// tidal flat(s)
        ///
        /// a large flat area of mud or sand attached to the shore and alternately covered and
        /// uncovered by the tide
        H_FLTT => "H.FLTT";
        /// glacier(s)
        ///
        /// a mass of ice, usually at high latitudes or high elevations, with sufficient
        /// thickness to flow away from the source area in lobes, tongues, or masses
        H_GLCR => "H.GLCR";
        /// golf, bukt
        ///
        /// a large recess in the coastline, larger than a bay
        H_GULF => "H.GULF";
        /// geyser
        ///
        /// a type of hot spring with intermittent eruptions of jets of hot water and steam
        H_GYSR => "H.GYSR";
        /// hamn(ar)
        ///
        /// a haven or space of deep water so sheltered by the adjacent land as to afford a safe
        /// anchorage for ships
        H_HBR => "H.HBR";
        /// del av hamn
        H_HBRX => "H.HBRX";
        /// inlet
        ///
        /// a narrow waterway extending into the land, or connecting a bay or lagoon with a
        /// larger body of water
        H_INLT => "H.INLT";
        /// former inlet
        ///
        /// an inlet which has been filled in, or blocked by deposits
        H_INLTQ => "H.INLTQ";
        /// gammel innsjøbunn
        ///
        /// a dried up or drained area of a former lake
        H_LBED => "H.LBED";
        /// lagoon
        ///
        /// a shallow coastal waterbody, completely or partly separated from a larger body of
        /// water by a barrier island, coral reef or other depositional feature
        H_LGN => "H.LGN";
        /// lagoons
        ///
        /// shallow coastal waterbodies, completely or partly separated from a larger body of
        /// water by a barrier island, coral reef or other depositional feature
        H_LGNS => "H.LGNS";
        /// del av lagun
        H_LGNX => "H.LGNX";
        /// innsjø
        ///
        /// a large inland body of standing water
        H_LK => "H.LK";
        /// crater lake
        ///
        /// a lake in a crater or caldera
        H_LKC => "H.LKC";
        /// intermittent lake
        H_LKI => "H.LKI";
        /// salt lake
        ///
        /// an inland body of salt water with no outlet
        H_LKN => "H.LKN";
        /// intermittent salt lake
        H_LKNI => "H.LKNI";
        /// kroksjø
        ///
        /// a crescent-shaped lake commonly found adjacent to meandering streams
        H_LKO => "H.LKO";
        /// intermittent oxbow lake
        H_LKOI => "H.LKOI";
        /// innsjøer
        ///
        /// large inland bodies of standing water
        H_LKS => "H.LKS";
        /// underground lake
        ///
        /// a standing body of water in a cave
        H_LKSB => "H.LKSB";
        /// crater lakes
        ///
        /// lakes in a crater or caldera
        H_LKSC => "H.LKSC";
        /// intermittent lakes
        H_LKSI => "H.LKSI";
        /// salt lakes
        ///
        /// inland bodies of salt water with no outlet
        H_LKSN => "H.LKSN";
        /// intermittent salt lakes
        H_LKSNI => "H.LKSNI";
        /// del av innsjø
        H_LKX => "H.LKX";
        /// salt evaporation ponds
        ///
        /// diked salt ponds used in the production of solar evaporated salt
        H_MFGN => "H.MFGN";
        /// mangrove swamp
        ///
        /// a tropical tidal mud flat characterized by mangrove vegetation
        H_MGV => "H.MGV";
        /// hed(ar)
        ///
        /// an area of open ground overlaid with wet peaty soils
        H_MOOR => "H.MOOR";
        /// marsh(es)
        ///
        /// a wetland dominated by grass-like vegetation
        H_MRSH => "H.MRSH";
        /// marskland
        ///
        /// a flat area, subject to periodic salt water inundation, dominated by grassy salt-
        /// tolerant plants
        H_MRSHN => "H.MRSHN";
        /// narrows
        ///
        /// a navigable narrow part of a bay, strait, river, etc.
        H_NRWS => "H.NRWS";
        /// hav
        ///
        /// one of the major divisions of the vast expanse of salt water covering part of the
        /// earth
        H_OCN => "H.OCN";
        /// brenninger
        ///
        /// an area of breaking waves caused by the meeting of currents or by waves moving
        /// against the current
        H_OVF => "H.OVF";
        /// damm
        ///
        /// a small standing waterbody
        H_PND => "H.PND";
        /// intermittent pond
        H_PNDI => "H.PNDI";
        /// salt pond
        ///
        /// a small standing body of salt water often in a marsh or swamp, usually along a
        /// seacoast
        H_PNDN => "H.PNDN";
        /// intermittent salt pond(s)
        H_PNDNI => "H.PNDNI";
        /// dammar
        ///
        /// small standing waterbodies
        H_PNDS => "H.PNDS";
        /// fishponds
        ///
        /// ponds or enclosures in which fish are kept or raised
        H_PNDSF => "H.PNDSF";
        /// intermittent ponds
        H_PNDSI => "H.PNDSI";
        /// salt ponds
        ///
        /// small standing bodies of salt water often in a marsh or swamp, usually along a
        /// seacoast
        H_PNDSN => "H.PNDSN";
        /// kulp
        ///
        /// a small and comparatively still, deep part of a larger body of water such as a
        /// stream or harbor; or a small body of standing water
        H_POOL => "H.POOL";
        /// intermittent pool
        H_POOLI => "H.POOLI";
        /// reach
        ///
        /// a straight section of a navigable stream or channel between two bends
        H_RCH => "H.RCH";
        /// icecap ridge
        ///
        /// a linear elevation on an icecap
        H_RDGG => "H.RDGG";
        /// redd
        ///
        /// an open anchorage affording less protection than a harbor
        H_RDST => "H.RDST";
        /// reef(s)
        ///
        /// a surface-navigation hazard composed of consolidated material
        H_RF => "H.RF";
        /// coral reef(s)
        ///
        /// a surface-navigation hazard composed of coral
        H_RFC => "H.RFC";
        /// del av rev
        H_RFX => "H.RFX";
        /// forsar
        ///
        /// a turbulent section of a stream associated with a steep, irregular stream bed
        H_RPDS => "H.RPDS";
        /// reservoar
        ///
        /// an artificial pond or lake
        H_RSV => "H.RSV";
        /// intermittent reservoir
        H_RSVI => "H.RSVI";
        /// vanntank
        ///
        /// a contained pool or tank of water at, below, or above ground level
        H_RSVT => "H.RSVT";
        /// ravin(er)
        ///
        /// a small, narrow, deep, steep-sided stream channel, smaller than a gorge
        H_RVN => "H.RVN";
        /// sabkha (oversvømt område)
        ///
        /// a salt flat or salt encrusted plain subject to periodic inundation from flooding or
        /// high tides
        H_SBKH => "H.SBKH";
        /// sound
        ///
        /// a long arm of the sea forming a channel between the mainland and an island or
        /// islands; or connecting two larger bodies of water
        H_SD => "H.SD";
        /// hav
        ///
        /// a large body of salt water more or less confined by continuous land or chains of
        /// islands forming a subdivision of an ocean
        H_SEA => "H.SEA";
        /// grund, rev
        ///
        /// a surface-navigation hazard composed of unconsolidated material
        H_SHOL => "H.SHOL";
        /// sill
        ///
        /// the low part of an underwater gap or saddle separating basins, including a similar
        /// feature at the mouth of a fjord
        H_SILL => "H.SILL";
        /// kilde
        ///
        /// a place where ground water flows naturally out of the ground
        H_SPNG => "H.SPNG";
        /// sulphur spring(s)
        ///
        /// a place where sulphur ground water flows naturally out of the ground
        H_SPNS => "H.SPNS";
        /// hot spring(s)
        ///
        /// a place where hot ground water flows naturally out of the ground
        H_SPNT => "H.SPNT";
        /// bekk
        ///
        /// a body of running water moving to a lower level in a channel on land
        H_STM => "H.STM";
        /// anabranch
        ///
        /// a diverging branch flowing out of a main stream and rejoining it downstream
        H_STMA => "H.STMA";
        /// elvesving
        ///
        /// a conspicuously curved or bent segment of a stream
        H_STMB => "H.STMB";
        /// canalized stream
        ///
        /// a stream that has been substantially ditched, diked, or straightened
        H_STMC => "H.STMC";
        /// biflod(er)
        ///
        /// a branch which flows away from the main stream, as in a delta or irrigation canal
        H_STMD => "H.STMD";
        /// headwaters
        ///
        /// the source and upper part of a stream, including the upper drainage basin
        H_STMH => "H.STMH";
        /// intermittent stream
        H_STMI => "H.STMI";
        /// del av periodiskt vattendrag
        H_STMIX => "H.STMIX";
        /// bekkeutløp
        ///
        /// a place where a stream discharges into a lagoon, lake, or the sea
        H_STMM => "H.STMM";
        /// abandoned watercourse
        ///
        /// a former stream or distributary no longer carrying flowing water, but still evident
        /// due to lakes, wetland, topographic or vegetation patterns
        H_STMQ => "H.STMQ";
        /// bekker
        ///
        /// bodies of running water moving to a lower level in a channel on land
        H_STMS => "H.STMS";
        /// elv uten utløp
        ///
        /// a surface stream that disappears into an underground channel, or dries up in an arid
        /// area
        H_STMSB => "H.STMSB";
        /// del av bekk
        H_STMX => "H.STMX";
        /// strait
        ///
        /// a relatively narrow waterway, usually narrower and less extensive than a sound,
        /// connecting two larger bodies of water
        H_STRT => "H.STRT";
        /// sump
        ///
        /// a wetland dominated by tree vegetation
        H_SWMP => "H.SWMP";
        /// bevattningssystem
        ///
        /// a network of ditches and one or more of the following elements: water supply,
        /// reservoir, canal, pump, well, drain, etc.
        H_SYSI => "H.SYSI";
        /// canal tunnel
        ///
        /// a tunnel through which a canal passes
        H_TNLC => "H.TNLC";
        /// flod
        ///
        /// a valley or ravine, bounded by relatively steep banks, which in the rainy season
        /// becomes a watercourse; found primarily in North Africa and the Middle East
        H_WAD => "H.WAD";
        /// flodkrök
        ///
        /// a conspicuously curved or bent segment of a wadi
        H_WADB => "H.WADB";
        /// flodförbindning
        ///
        /// a place where two or more wadies join
        H_WADJ => "H.WADJ";
        /// flodmynning
        ///
        /// the lower terminus of a wadi where it widens into an adjoining floodplain,
        /// depression, or waterbody
        H_WADM => "H.WADM";
        /// floder
        ///
        /// valleys or ravines, bounded by relatively steep banks, which in the rainy season
        /// become watercourses; found primarily in North Africa and the Middle East
        H_WADS => "H.WADS";
        /// del av flod
        H_WADX => "H.WADX";
        /// strømvirvel
        ///
        /// a turbulent, rotating movement of water in a stream
        H_WHRL => "H.WHRL";
        /// brunn, källa
        ///
        /// a cylindrical hole, pit, or tunnel drilled or dug down to a depth from which water,
        /// oil, or gas can be pumped or brought to the surface
        H_WLL => "H.WLL";
        /// abandoned well
        H_WLLQ => "H.WLLQ";
        /// brønner
        ///
        /// cylindrical holes, pits, or tunnels drilled or dug down to a depth from which water,
        /// oil, or gas can be pumped or brought to the surface
        H_WLLS => "H.WLLS";
        /// våtmark
        ///
        /// an area subject to inundation, usually characterized by bog, marsh, or swamp
        /// vegetation
        H_WTLD => "H.WTLD";
        /// intermittent wetland
        H_WTLDI => "H.WTLDI";
        /// vannløp
        ///
        /// a natural, well-defined channel produced by flowing water, or an artificial channel
        /// designed to carry flowing water
        H_WTRC => "H.WTRC";
        /// vannhull
        ///
        /// a natural hole, hollow, or small depression that contains water, used by man and
        /// animals, especially in arid areas
        H_WTRH => "H.WTRH";
        /// historical name
        historicalName => "historicalName";
        /// parks,area, ...
        L => "L";
        /// agricultural colony
        ///
        /// a tract of land set aside for agricultural settlement
        L_AGRC => "L.AGRC";
        /// amusement park
        ///
        /// Amusement Park are theme parks, adventure parks offering entertainment, similar to
        /// funfairs but with a fix location
        L_AMUS => "L.AMUS";
        /// area, område
        ///
        /// a tract of land without homogeneous character or boundaries
        L_AREA => "L.AREA";
        /// drainage basin
        ///
        /// an area drained by a stream
        L_BSND => "L.BSND";
        /// petroleum basin
        ///
        /// an area underlain by an oil-rich structural basin
        L_BSNP => "L.BSNP";
        /// battlefield
        ///
        /// a site of a land battle of historical importance
        L_BTL => "L.BTL";
        /// clearing
        ///
        /// an area in a forest with trees removed
        L_CLG => "L.CLG";
        /// allmenning
        ///
        /// a park or pasture for community use
        L_CMN => "L.CMN";
        /// concession area
        ///
        /// a lease of land by a government for economic development, e.g., mining, forestry
        L_CNS => "L.CNS";
        /// coalfield
        ///
        /// a region in which coal deposits of possible economic value occur
        L_COLF => "L.COLF";
        /// continent
        ///
        /// continent : Europe, Africa, Asia, North America, South America, Oceania,Antarctica
        L_CONT => "L.CONT";
        /// coast
        ///
        /// a zone of variable width straddling the shoreline
        L_CST => "L.CST";
        /// affärscenter
        ///
        /// a place where a number of businesses are located
        L_CTRB => "L.CTRB";
        /// boligområde
        ///
        /// a tract of land on which many houses of similar design are built according to a
        /// development plan
        L_DEVH => "L.DEVH";
        /// field(s)
        ///
        /// an open as opposed to wooded area
        L_FLD => "L.FLD";
        /// (konst)bevattnade fält
        ///
        /// a tract of level or terraced land which is irrigated
        L_FLDI => "L.FLDI";
        /// gasfield
        ///
        /// an area containing a subterranean store of natural gas of economic value
        L_GASF => "L.GASF";
        /// beiteområde
        ///
        /// an area of grasses and shrubs used for grazing
        L_GRAZ => "L.GRAZ";
        /// gravel area
        ///
        /// an area covered with gravel
        L_GVL => "L.GVL";
        /// industrial area
        ///
        /// an area characterized by industrial activity
        L_INDS => "L.INDS";
        /// arctic land
        ///
        /// a tract of land in the Arctic
        L_LAND => "L.LAND";
        /// locality
        ///
        /// a minor area or place of unspecified or mixed character and indefinite boundaries
        L_LCTY => "L.LCTY";
        /// military base
        ///
        /// a place used by an army or other armed service for storing arms and supplies, and
        /// for accommodating and training troops, a base from which operations can be initiated
        L_MILB => "L.MILB";
        /// gruveområde
        ///
        /// an area of mine sites where minerals and ores are extracted
        L_MNA => "L.MNA";
        /// maneuver area
        ///
        /// a tract of land where military field exercises are carried out
        L_MVA => "L.MVA";
        /// marinbas
        ///
        /// an area used to store supplies, provide barracks for troops and naval personnel, a
        /// port for naval vessels, and from which operations are initiated
        L_NVB => "L.NVB";
        /// oas(er)
        ///
        /// an area in a desert made productive by the availability of water
        L_OAS => "L.OAS";
        /// oilfield
        ///
        /// an area containing a subterranean store of petroleum of economic value
        L_OILF => "L.OILF";
        /// peat cutting area
        ///
        /// an area where peat is harvested
        L_PEAT => "L.PEAT";
        /// park
        ///
        /// an area, often of forested land, maintained as a place of beauty, or for recreation
        L_PRK => "L.PRK";
        /// hamn
        ///
        /// a place provided with terminal and transfer facilities for loading and discharging
        /// waterborne cargo or passengers, usually located in a harbor
        L_PRT => "L.PRT";
        /// kvicksand
        ///
        /// an area where loose sand with water moving through it may become unstable when heavy
        /// objects are placed at the surface, causing them to sink
        L_QCKS => "L.QCKS";
        /// republic
        L_REP => "L.REP";
        /// regulert område
        ///
        /// a tract of public land reserved for future use or restricted as to use
        L_RES => "L.RES";
        /// agricultural reserve
        ///
        /// a tract of land reserved for agricultural reclamation and/or development
        L_RESA => "L.RESA";
        /// forest reserve
        ///
        /// a forested area set aside for preservation or controlled use
        L_RESF => "L.RESF";
        /// hunting reserve
        ///
        /// a tract of land used primarily for hunting
        L_RESH => "L.RESH";
        /// nature reserve
        ///
        /// an area reserved for the maintenance of a natural habitat
        L_RESN => "L.RESN";
        /// palm tree reserve
        ///
        /// an area of palm trees where use is controlled
        L_RESP => "L.RESP";
        /// reservat
        ///
        /// a tract of land set aside for aboriginal, tribal, or native populations
        L_RESV => "L.RESV";
        /// viltreservat
        ///
        /// a tract of public land reserved for the preservation of wildlife
        L_RESW => "L.RESW";
        /// region
        ///
        /// an area distinguished by one or more observable physical or cultural characteristics
        L_RGN => "L.RGN";
        /// economic region
        ///
        /// a region of a country established for economic development or for statistical
        /// purposes
        L_RGNE => "L.RGNE";
        /// historical region
        L_RGNH => "L.RGNH";
        /// innsjøområde
        ///
        /// a tract of land distinguished by numerous lakes
        L_RGNL => "L.RGNL";
        /// artillery range
        ///
        /// a tract of land used for artillery firing practice
        L_RNGA => "L.RNGA";
        /// salt area
        ///
        /// a shallow basin or flat where salt accumulates after periodic inundation
        L_SALT => "L.SALT";
        /// snowfield
        ///
        /// an area of permanent snow and ice forming the accumulation area of a glacier
        L_SNOW => "L.SNOW";
        /// stammeområde
        ///
        /// a tract of land used by nomadic or other tribes
        L_TRB => "L.TRB";
        /// master source holdings list
        L_ZZZZZ => "L.ZZZZZ";
        /// located in
        ///
        /// Indicates that the subject resource is located in the object feature
        locatedIn => "locatedIn";
        /// map
        ///
        /// A geonames map centered on the feature.
        locationMap => "locationMap";
        /// Map
        ///
        /// A Web page displaying a map
        Map => "Map";
        Marc_Wick => "Marc-Wick";
        /// name
        ///
        /// The main international name of a feature. The value has no xml:lang tag.
        name => "name";
        /// nearby
        ///
        /// A feature close to the reference feature
        nearby => "nearby";
        /// nearby features
        ///
        /// Links to an RDF document containing the descriptions of nearby features
        nearbyFeatures => "nearbyFeatures";
        /// neighbour
        ///
        /// A feature sharing a common boarder with the reference feature
        neighbour => "neighbour";
        /// neighbouring features
        ///
        /// Links to an RDF document containing the descriptions of neighbouring features.
        /// Applies when the feature has definite boarders.
        neighbouringFeatures => "neighbouringFeatures";
        /// official name
        ///
        /// A name in an official local language
        officialName => "officialName";
        /// city, village,...
        P => "P";
        /// befolkad plats
        ///
        /// a city, town, village, or other agglomeration of buildings where people live and
        /// work
        P_PPL => "P.PPL";
        /// seat of a first-order administrative division
        ///
        /// seat of a first-order administrative division (PPLC takes precedence over PPLA)
        P_PPLA => "P.PPLA";
        /// seat of a second-order administrative division
        P_PPLA2 => "P.PPLA2";
        /// seat of a third-order administrative division
        P_PPLA3 => "P.PPLA3";
        /// seat of a fourth-order administrative division
        P_PPLA4 => "P.PPLA4";
        /// Hovedstad
        P_PPLC => "P.PPLC";
        /// farm village
        ///
        /// a populated place where the population is largely engaged in agricultural activities
        P_PPLF => "P.PPLF";
        /// regjeringssete i en politisk enhet
        P_PPLG => "P.PPLG";
        /// befolkad ort
        ///
        /// an area similar to a locality but with a small group of dwellings or other buildings
        P_PPLL => "P.PPLL";
        /// abandoned populated place
        P_PPLQ => "P.PPLQ";
        /// religious populated place
        ///
        /// a populated place whose population is largely engaged in religious occupations
        P_PPLR => "P.PPLR";
        /// befolkade platser
        ///
        /// cities, towns, villages, or other agglomerations of buildings where people live and
        /// work
        P_PPLS => "P.PPLS";
        /// destroyed populated place
        ///
        /// a village, town or city destroyed by a natural disaster, or by war
        P_PPLW => "P.PPLW";
        /// del av befolkad plats
        P_PPLX => "P.PPLX";
        /// israeli settlement
        P_STLMT => "P.STLMT";
        /// level 1 administrative parent
        parentADM1 => "parentADM1";
        /// level 2 administrative parent
        parentADM2 => "parentADM2";
        /// level 3 administrative parent
        parentADM3 => "parentADM3";
        /// level 4 administrative parent
        parentADM4 => "parentADM4";
        /// parent country
        parentCountry => "parentCountry";
        /// parent feature
        ///
        /// A feature parent of the current one, in either administrative or physical
        /// subdivision.
        parentFeature => "parentFeature";
        /// population
        population => "population";
        /// postal code
        postalCode => "postalCode";
        /// road, railroad, ...
        R => "R";
        /// broväg, höjd gångbana
        ///
        /// a raised roadway across wet ground or shallow water
        R_CSWY => "R.CSWY";
        /// former causeway
        ///
        /// a causeway no longer used for transportation
        R_CSWYQ => "R.CSWYQ";
        /// oil pipeline
        ///
        /// a pipeline used for transporting oil
        R_OILP => "R.OILP";
        /// promenad
        ///
        /// a place for public walking, usually along a beach front
        R_PRMN => "R.PRMN";
        /// eid
        ///
        /// a place where boats, goods, etc., are carried overland between navigable waters
        R_PTGE => "R.PTGE";
        /// road
        ///
        /// an open way with improved surface for transportation of animals, people and vehicles
        R_RD => "R.RD";
        /// ancient road
        ///
        /// the remains of a road used by ancient cultures
        R_RDA => "R.RDA";
        /// road bend
        ///
        /// a conspicuously curved or bent section of a road
        R_RDB => "R.RDB";
        /// road cut
        ///
        /// an excavation cut through a hill or ridge for a road
        R_RDCUT => "R.RDCUT";
        /// road junction
        ///
        /// a place where two or more roads join
        R_RDJCT => "R.RDJCT";
        /// jernbanekryss
        ///
        /// a place where two or more railroad tracks join
        R_RJCT => "R.RJCT";
        /// jernbane
        ///
        /// a permanent twin steel-rail track on which freight and passenger cars move long
        /// distances
        R_RR => "R.RR";
        /// abandoned railroad
        R_RRQ => "R.RRQ";
        /// caravan route
        ///
        /// the route taken by caravans
        R_RTE => "R.RTE";
        /// jernbaneområde
        ///
        /// a system of tracks used for the making up of trains, and switching and storing
        /// freight cars
        R_RYD => "R.RYD";
        /// gate
        ///
        /// a paved urban thoroughfare
        R_ST => "R.ST";
        /// boskapsled
        ///
        /// a route taken by livestock herds
        R_STKR => "R.STKR";
        /// tunnel
        ///
        /// a subterranean passageway for transportation
        R_TNL => "R.TNL";
        /// natural tunnel
        ///
        /// a cave that is open at both ends
        R_TNLN => "R.TNLN";
        /// road tunnel
        ///
        /// a tunnel through which a road passes
        R_TNLRD => "R.TNLRD";
        /// jernbanetunnel
        ///
        /// a tunnel through which a railroad passes
        R_TNLRR => "R.TNLRR";
        /// tunneler
        ///
        /// subterranean passageways for transportation
        R_TNLS => "R.TNLS";
        /// spår, stig
        ///
        /// a path, track, or route used by pedestrians, animals, or off-road vehicles
        R_TRL => "R.TRL";
        /// RDF Data
        ///
        /// A Document containing RDF description of one or several features.
        RDFData => "RDFData";
        /// spot, building, farm, ...
        S => "S";
        /// administrasjonsanlegg
        ///
        /// a government building
        S_ADMF => "S.ADMF";
        /// agricultural facility
        ///
        /// a building and/or tract of land used for improving agriculture
        S_AGRF => "S.AGRF";
        /// airbase
        ///
        /// an area used to store supplies, provide barracks for air force personnel, hangars
        /// and runways for aircraft, and from which operations are initiated
        S_AIRB => "S.AIRB";
        /// airfield
        ///
        /// a place on land where aircraft land and take off; no facilities provided for the
        /// commercial handling of passengers and cargo
        S_AIRF => "S.AIRF";
        /// heliport
        ///
        /// a place where helicopters land and take off
        S_AIRH => "S.AIRH";
        /// airport
        ///
        /// a place where aircraft regularly land and take off, with runways, navigational aids,
        /// and major facilities for the commercial handling of passengers and cargo
        S_AIRP => "S.AIRP";
        /// abandoned airfield
        S_AIRQ => "S.AIRQ";
        /// amfiteater
        ///
        /// an oval or circular structure with rising tiers of seats about a stage or open space
        S_AMTH => "S.AMTH";
        /// ancient site
        ///
        /// a place where archeological remains, old structures, or cultural artifacts are
        /// located
        S_ANS => "S.ANS";
        /// aquaculture facility
        ///
        /// facility or area for the cultivation of aquatic animals and plants, especially fish,
        /// shellfish, and seaweed, in natural or controlled marine or freshwater environments;
        /// underwater agriculture
        S_AQC => "S.AQC";
        /// arch
        ///
        /// a natural or man-made structure in the form of an arch
        S_ARCH => "S.ARCH";
        /// astronomical station
        ///
        /// a point on the earth whose position has been determined by observations of celestial
        /// bodies
        S_ASTR => "S.ASTR";
        /// asyl
        ///
        /// a facility where the insane are cared for and protected
        S_ASYL => "S.ASYL";
        /// athletic field
        ///
        /// a tract of land used for playing team sports, and athletic track and field events
        S_ATHF => "S.ATHF";
        /// automatic teller machine
        ///
        /// An unattended electronic machine in a public place, connected to a data system and
        /// related equipment and activated by a bank customer to obtain cash withdrawals and
        /// other banking services.
        S_ATM => "S.ATM";
        /// bank
        ///
        /// A business establishment in which money is kept for saving or commercial purposes or
        /// is invested, supplied for loans, or exchanged.
        S_BANK => "S.BANK";
        /// beacon
        ///
        /// a fixed artificial navigation mark
        S_BCN => "S.BCN";
        /// bridge
        ///
        /// a structure erected across an obstacle such as a stream, road, etc., in order to
        /// carry roads, railroads, and pedestrians across
        S_BDG => "S.BDG";
        /// raserad bro
        ///
        /// a destroyed or decayed bridge which is no longer functional
        S_BDGQ => "S.BDGQ";
        /// building(s)
        ///
        /// a structure built for permanent use, as a house, factory, etc.
        S_BLDG => "S.BLDG";
        /// office building
        ///
        /// commercial building where business and/or services are conducted
        S_BLDO => "S.BLDO";
        /// boundary marker
        ///
        /// a fixture marking a point along a boundary
        S_BP => "S.BP";
        /// barracks
        ///
        /// a building for lodging military personnel
        S_BRKS => "S.BRKS";
        /// breakwater
        ///
        /// a structure erected to break the force of waves at the entrance to a harbor or port
        S_BRKW => "S.BRKW";
        /// baling station
        ///
        /// a facility for baling agricultural products
        S_BSTN => "S.BSTN";
        /// boatyard
        ///
        /// a waterside facility for servicing, repairing, and building small vessels
        S_BTYD => "S.BTYD";
        /// begravningsgrotta(or)
        ///
        /// a cave used for human burials
        S_BUR => "S.BUR";
        /// bus station
        ///
        /// a facility comprising ticket office, platforms, etc. for loading and unloading
        /// passengers
        S_BUSTN => "S.BUSTN";
        /// Busshållplats
        ///
        /// a place lacking station facilities
        S_BUSTP => "S.BUSTP";
        /// cairn
        ///
        /// a heap of stones erected as a landmark or for other purposes
        S_CARN => "S.CARN";
        /// cave(s)
        ///
        /// an underground passageway or chamber, or cavity on the side of a cliff
        S_CAVE => "S.CAVE";
        /// Centre Continuous Learning
        ///
        /// Centres for Continuous Learning
        S_CCL => "S.CCL";
        /// church
        ///
        /// a building for public Christian worship
        S_CH => "S.CH";
        /// camp(s)
        ///
        /// a site occupied by tents, huts, or other shelters for temporary use
        S_CMP => "S.CMP";
        /// logging camp
        ///
        /// a camp used by loggers
        S_CMPL => "S.CMPL";
        /// arbeidsleir
        ///
        /// a camp used by migrant or temporary laborers
        S_CMPLA => "S.CMPLA";
        /// gruveleir
        ///
        /// a camp used by miners
        S_CMPMN => "S.CMPMN";
        /// oil camp
        ///
        /// a camp used by oilfield workers
        S_CMPO => "S.CMPO";
        /// abandoned camp
        S_CMPQ => "S.CMPQ";
        /// flyktingläger
        ///
        /// a camp used by refugees
        S_CMPRF => "S.CMPRF";
        /// cemetery
        ///
        /// a burial place or ground
        S_CMTY => "S.CMTY";
        /// communication center
        ///
        /// a facility, including buildings, antennae, towers and electronic equipment for
        /// receiving and transmitting information
        S_COMC => "S.COMC";
        /// corral(s)
        ///
        /// a pen or enclosure for confining or capturing animals
        S_CRRL => "S.CRRL";
        /// casino
        ///
        /// a building used for entertainment, especially gambling
        S_CSNO => "S.CSNO";
        /// castle
        ///
        /// a large fortified building or set of buildings
        S_CSTL => "S.CSTL";
        /// customs house
        ///
        /// a building in a port where customs and duties are paid, and where vessels are
        /// entered and cleared
        S_CSTM => "S.CSTM";
        /// courthouse
        ///
        /// a building in which courts of law are held
        S_CTHSE => "S.CTHSE";
        /// atomcentrum
        ///
        /// a facility where atomic research is carried out
        S_CTRA => "S.CTRA";
        /// community center
        ///
        /// a facility for community recreation and other activities
        S_CTRCM => "S.CTRCM";
        /// facility center
        ///
        /// a place where more than one facility is situated
        S_CTRF => "S.CTRF";
        /// legesenter
        ///
        /// a complex of health care buildings including two or more of the following: hospital,
        /// medical school, clinic, pharmacy, doctor&#39;s offices, etc.
        S_CTRM => "S.CTRM";
        /// religious center
        ///
        /// a facility where more than one religious activity is carried out, e.g., retreat,
        /// school, monastery, worship
        S_CTRR => "S.CTRR";
        /// romsenter
        ///
        /// a facility for launching, tracking, or controlling satellites and space vehicles
        S_CTRS => "S.CTRS";
        /// convent
        ///
        /// a building where a community of nuns lives in seclusion
        S_CVNT => "S.CVNT";
        /// dam
        ///
        /// a barrier constructed across a stream to impound water
        S_DAM => "S.DAM";
        /// förstörd damm
        ///
        /// a destroyed or decayed dam which is no longer functional
        S_DAMQ => "S.DAMQ";
        /// demning gravd ned til grunnfjellet
        ///
        /// a dam put down to bedrock in a sand river
        S_DAMSB => "S.DAMSB";
        /// dairy
        ///
        /// a facility for the processing, sale and distribution of milk or milk products
        S_DARY => "S.DARY";
        /// demning gravd ned til grunnfjellet
        ///
        /// a dock providing support for a vessel, and means for removing the water so that the
        /// bottom of the vessel can be exposed
        S_DCKD => "S.DCKD";
        /// dockyard
        ///
        /// a facility for servicing, building, or repairing ships
        S_DCKY => "S.DCKY";
        /// damm, fördämning, bank
        ///
        /// an earth or stone embankment usually constructed for flood or stream control
        S_DIKE => "S.DIKE";
        /// diplomatic facility
        ///
        /// office, residence, or facility of a foreign government, which may include an
        /// embassy, consulate, chancery, office of charge d?affaires, or other diplomatic,
        /// economic, military, or cultural mission
        S_DIP => "S.DIP";
        /// brennstofflager
        ///
        /// an area where fuel is stored
        S_DPOF => "S.DPOF";
        /// egendom(ar)
        ///
        /// a large commercialized agricultural landholding with associated buildings and other
        /// facilities
        S_EST => "S.EST";
        /// banana plantation
        ///
        /// an estate that specializes in the growing of bananas
        S_ESTB => "S.ESTB";
        /// cotton plantation
        ///
        /// an estate specializing in the cultivation of cotton
        S_ESTC => "S.ESTC";
        /// oil palm plantation
        ///
        /// an estate specializing in the cultivation of oil palm trees
        S_ESTO => "S.ESTO";
        /// gummiplantage
        ///
        /// an estate which specializes in growing and tapping rubber trees
        S_ESTR => "S.ESTR";
        /// sockerplantage
        ///
        /// an estate that specializes in growing sugar cane
        S_ESTSG => "S.ESTSG";
        /// sisal plantation
        ///
        /// an estate that specializes in growing sisal
        S_ESTSL => "S.ESTSL";
        /// tea plantation
        ///
        /// an estate which specializes in growing tea bushes
        S_ESTT => "S.ESTT";
        /// del av egendom
        S_ESTX => "S.ESTX";
        /// anlegg
        ///
        /// a building or buildings housing a center, institute, foundation, hospital, prison,
        /// mission, courthouse, etc.
        S_FCL => "S.FCL";
        /// foundry
        ///
        /// a building or works where metal casting is carried out
        S_FNDY => "S.FNDY";
        /// farm
        ///
        /// a tract of land with associated buildings devoted to agriculture
        S_FRM => "S.FRM";
        /// abandoned farm
        S_FRMQ => "S.FRMQ";
        /// farmer
        ///
        /// tracts of land with associated buildings devoted to agriculture
        S_FRMS => "S.FRMS";
        /// bondgård
        ///
        /// the buildings and adjacent service areas of a farm
        S_FRMT => "S.FRMT";
        /// fort
        ///
        /// a defensive structure or earthworks
        S_FT => "S.FT";
        /// ferge
        ///
        /// a boat or other floating conveyance and terminal facilities regularly used to
        /// transport people and vehicles across a waterbody
        S_FY => "S.FY";
        /// gate
        ///
        /// a controlled access entrance or exit
        S_GATE => "S.GATE";
        /// garden(s)
        ///
        /// an enclosure for displaying selected plant or animal life
        S_GDN => "S.GDN";
        /// ghat
        ///
        /// a set of steps leading to a river, which are of religious significance, and at their
        /// base is usually a platform for bathing
        S_GHAT => "S.GHAT";
        /// gjestehus
        ///
        /// a house used to provide lodging for paying guests
        S_GHSE => "S.GHSE";
        /// gas och olje separator
        ///
        /// a facility for separating gas from oil
        S_GOSP => "S.GOSP";
        /// local government office
        ///
        /// a facility housing local governmental offices, usually a city, town, or village hall
        S_GOVL => "S.GOVL";
        /// grav
        ///
        /// a burial site
        S_GRVE => "S.GRVE";
        /// eneboerhytte
        ///
        /// a secluded residence, usually for religious sects
        S_HERM => "S.HERM";
        /// halting place
        ///
        /// a place where caravans stop for rest
        S_HLT => "S.HLT";
        /// homestead
        ///
        /// a residence, owner&#39;s or manager&#39;s, on a sheep or cattle station, woolshed,
        /// outcamp, or Aboriginal outstation, specific to Australia and New Zealand
        S_HMSD => "S.HMSD";
        /// house(s)
        ///
        /// a building used as a human habitation
        S_HSE => "S.HSE";
        /// country house
        ///
        /// a large house, mansion, or chateau, on a large estate
        S_HSEC => "S.HSEC";
        /// hospital
        ///
        /// a building in which sick or injured, especially those confined to bed, are medically
        /// treated
        S_HSP => "S.HSP";
        /// clinic
        ///
        /// a medical facility associated with a hospital for outpatients
        S_HSPC => "S.HSPC";
        /// apotek
        ///
        /// a building where medical or dental aid is dispensed
        S_HSPD => "S.HSPD";
        /// leprasykehus
        ///
        /// an asylum or hospital for lepers
        S_HSPL => "S.HSPL";
        /// historical site
        ///
        /// a place of historical importance
        S_HSTS => "S.HSTS";
        /// hotel
        ///
        /// a building providing lodging and/or meals for the public
        S_HTL => "S.HTL";
        /// hut
        ///
        /// a small primitive house
        S_HUT => "S.HUT";
        /// huts
        ///
        /// small primitive houses
        S_HUTS => "S.HUTS";
        /// military installation
        ///
        /// a facility for use of and control by armed forces
        S_INSM => "S.INSM";
        /// forskningsinstitut
        ///
        /// a facility where research is carried out
        S_ITTR => "S.ITTR";
        /// jetty
        ///
        /// a structure built out into the water at a river mouth or harbor entrance to regulate
        /// currents and silting
        S_JTY => "S.JTY";
        /// kai
        ///
        /// a place where boats receive or discharge passengers and freight, but lacking most
        /// port facilities
        S_LDNG => "S.LDNG";
        /// leper colony
        ///
        /// a settled area inhabited by lepers in relative isolation
        S_LEPC => "S.LEPC";
        /// bibliotek
        ///
        /// A place in which information resources such as books are kept for reading,
        /// reference, or lending.
        S_LIBR => "S.LIBR";
        /// landfill
        ///
        /// a place for trash and garbage disposal in which the waste is buried between layers
        /// of earth to build up low-lying land
        S_LNDF => "S.LNDF";
        /// lock(s)
        ///
        /// a basin in a waterway with gates at each end by means of which vessels are passed
        /// from one water level to another
        S_LOCK => "S.LOCK";
        /// fyr
        ///
        /// a distinctive structure exhibiting a major navigation light
        S_LTHSE => "S.LTHSE";
        /// kjøpesenter
        ///
        /// A large, often enclosed shopping complex containing various stores, businesses, and
        /// restaurants usually accessible by common passageways.
        S_MALL => "S.MALL";
        /// marina
        ///
        /// a harbor facility for small boats, yachts, etc.
        S_MAR => "S.MAR";
        /// fabrik
        ///
        /// one or more buildings where goods are manufactured, processed or fabricated
        S_MFG => "S.MFG";
        /// brewery
        ///
        /// one or more buildings where beer is brewed
        S_MFGB => "S.MFGB";
        /// cannery
        ///
        /// a building where food items are canned
        S_MFGC => "S.MFGC";
        /// copper works
        ///
        /// a facility for processing copper ore
        S_MFGCU => "S.MFGCU";
        /// kalkbrenneri
        ///
        /// a furnace in which limestone is reduced to lime
        S_MFGLM => "S.MFGLM";
        /// ammunisjonsfabrikk
        ///
        /// a factory where ammunition is made
        S_MFGM => "S.MFGM";
        /// fosfatanlegg
        ///
        /// a facility for producing fertilizer
        S_MFGPH => "S.MFGPH";
        /// abandoned factory
        S_MFGQ => "S.MFGQ";
        /// sockerbruk, sockerraffinaderi
        ///
        /// a facility for converting raw sugar into refined sugar
        S_MFGSG => "S.MFGSG";
        /// marked
        ///
        /// a place where goods are bought and sold at regular intervals
        S_MKT => "S.MKT";
        /// kvarn
        ///
        /// a building housing machines for transforming, shaping, finishing, grinding, or
        /// extracting products
        S_ML => "S.ML";
        /// malmbehandlingsanlegg
        ///
        /// a facility for improving the metal content of ore by concentration
        S_MLM => "S.MLM";
        /// olive oil mill
        ///
        /// a mill where oil is extracted from olives
        S_MLO => "S.MLO";
        /// sockerbruk, sockerraffinaderi
        ///
        /// a facility where sugar cane is processed into raw sugar
        S_MLSG => "S.MLSG";
        /// former sugar mill
        ///
        /// a sugar mill no longer used as a sugar mill
        S_MLSGQ => "S.MLSGQ";
        /// sagbruk
        ///
        /// a mill where logs or lumber are sawn to specified shapes and sizes
        S_MLSW => "S.MLSW";
        /// vindmølle
        ///
        /// a mill or water pump powered by wind
        S_MLWND => "S.MLWND";
        /// kvernhus
        ///
        /// a mill powered by running water
        S_MLWTR => "S.MLWTR";
        /// gruva(or)
        ///
        /// a site where mineral ores are extracted from the ground by excavating surface pits
        /// and subterranean passages
        S_MN => "S.MN";
        /// gold mine(s)
        ///
        /// a mine where gold ore, or alluvial gold is extracted
        S_MNAU => "S.MNAU";
        /// coal mine(s)
        ///
        /// a mine where coal is extracted
        S_MNC => "S.MNC";
        /// chrome mine(s)
        ///
        /// a mine where chrome ore is extracted
        S_MNCR => "S.MNCR";
        /// copper mine(s)
        ///
        /// a mine where copper ore is extracted
        S_MNCU => "S.MNCU";
        /// diatomite mine(s)
        ///
        /// a place where diatomaceous earth is extracted
        S_MNDT => "S.MNDT";
        /// iron mine(s)
        ///
        /// a mine where iron ore is extracted
        S_MNFE => "S.MNFE";
        /// monument
        ///
        /// a commemorative structure or statue
        S_MNMT => "S.MNMT";
        /// salt mine(s)
        ///
        /// a mine from which salt is extracted
        S_MNN => "S.MNN";
        /// nickel mine(s)
        ///
        /// a mine where nickel ore is extracted
        S_MNNI => "S.MNNI";
        /// lead mine(s)
        ///
        /// a mine where lead ore is extracted
        S_MNPB => "S.MNPB";
        /// placer mine(s)
        ///
        /// a place where heavy metals are concentrated and running water is used to extract
        /// them from unconsolidated sediments
        S_MNPL => "S.MNPL";
        /// abandoned mine
        S_MNQ => "S.MNQ";
        /// quarry(-ies)
        ///
        /// a surface mine where building stone or gravel and sand, etc. are extracted
        S_MNQR => "S.MNQR";
        /// tin mine(s)
        ///
        /// a mine where tin ore is extracted
        S_MNSN => "S.MNSN";
        /// mole
        ///
        /// a massive structure of masonry or large stones serving as a pier or breakwater
        S_MOLE => "S.MOLE";
        /// moské
        ///
        /// a building for public Islamic worship
        S_MSQE => "S.MSQE";
        /// beskickning
        ///
        /// a place characterized by dwellings, school, church, hospital and other facilities
        /// operated by a religious group for the purpose of providing charitable services and
        /// to propagate religion
        S_MSSN => "S.MSSN";
        /// abandoned mission
        S_MSSNQ => "S.MSSNQ";
        /// kloster
        ///
        /// a building and grounds where a community of monks lives in seclusion
        S_MSTY => "S.MSTY";
        /// metro station
        ///
        /// metro station (Underground, Tube, or Métro)
        S_MTRO => "S.MTRO";
        /// museum
        ///
        /// a building where objects of permanent interest in one or more of the arts and
        /// sciences are preserved and exhibited
        S_MUS => "S.MUS";
        /// novisiat
        ///
        /// a religious house or school where novices are trained
        S_NOV => "S.NOV";
        /// barnehage
        ///
        /// a place where plants are propagated for transplanting or grafting
        S_NSY => "S.NSY";
        /// observasjonssted
        ///
        /// a wildlife or scenic observation point
        S_OBPT => "S.OBPT";
        /// observatorium
        ///
        /// a facility equipped for observation of atmospheric or space phenomena
        S_OBS => "S.OBS";
        /// radio observatory
        ///
        /// a facility equipped with an array of antennae for receiving radio waves from space
        S_OBSR => "S.OBSR";
        /// knutpunkt för oljepipeline
        ///
        /// a section of an oil pipeline where two or more pipes join together
        S_OILJ => "S.OILJ";
        /// abandoned oil well
        S_OILQ => "S.OILQ";
        /// oil refinery
        ///
        /// a facility for converting crude oil into refined petroleum products
        S_OILR => "S.OILR";
        /// depå
        ///
        /// a tract of land occupied by large, cylindrical, metal tanks in which oil or liquid
        /// petrochemicals are stored
        S_OILT => "S.OILT";
        /// oil well
        ///
        /// a well from which oil may be pumped
        S_OILW => "S.OILW";
        /// opera house
        ///
        /// A theater designed chiefly for the performance of operas.
        S_OPRA => "S.OPRA";
        /// palace
        ///
        /// a large stately house, often a royal or presidential residence
        S_PAL => "S.PAL";
        /// pagod
        ///
        /// a tower-like storied structure, usually a Buddhist shrine
        S_PGDA => "S.PGDA";
        /// pier
        ///
        /// a structure built out into navigable water on piles providing berthing for ships and
        /// recreation
        S_PIER => "S.PIER";
        /// parkerginsplats
        ///
        /// an area used for parking vehicles
        S_PKLT => "S.PKLT";
        /// oil pumping station
        ///
        /// a facility for pumping oil through a pipeline
        S_PMPO => "S.PMPO";
        /// pumpstation för vatten
        ///
        /// a facility for pumping water from a major well or through a pipeline
        S_PMPW => "S.PMPW";
        /// post office
        ///
        /// a public building in which mail is received, sorted and distributed
        S_PO => "S.PO";
        /// police post
        ///
        /// a building in which police are stationed
        S_PP => "S.PP";
        /// abandoned police post
        S_PPQ => "S.PPQ";
        /// inngang til militæranlegg
        ///
        /// a controlled access to a park
        S_PRKGT => "S.PRKGT";
        /// hovedkvarter på militæranlegg
        ///
        /// a park administrative facility
        S_PRKHQ => "S.PRKHQ";
        /// fengsel
        ///
        /// a facility for confining prisoners
        S_PRN => "S.PRN";
        /// forbedringsanstalt
        ///
        /// a facility for confining, training, and reforming young law offenders
        S_PRNJ => "S.PRNJ";
        /// abandoned prison
        S_PRNQ => "S.PRNQ";
        /// kraftstasjon
        ///
        /// a facility for generating electric power
        S_PS => "S.PS";
        /// hydroelectric power station
        ///
        /// a building where electricity is generated from water power
        S_PSH => "S.PSH";
        /// border post
        ///
        /// a post or station at an international boundary for the regulation of movement of
        /// people and goods
        S_PSTB => "S.PSTB";
        /// customs post
        ///
        /// a building at an international boundary where customs and duties are paid on goods
        S_PSTC => "S.PSTC";
        /// patrol post
        ///
        /// a post from which patrols are sent out
        S_PSTP => "S.PSTP";
        /// pyramid
        ///
        /// an ancient massive structure of square ground plan with four triangular faces
        /// meeting at a point and used for enclosing tombs
        S_PYR => "S.PYR";
        /// pyramider
        ///
        /// ancient massive structures of square ground plan with four triangular faces meeting
        /// at a point and used for enclosing tombs
        S_PYRS => "S.PYRS";
        /// brygge
        ///
        /// a structure of solid construction along a shore or bank which provides berthing for
        /// ships and which generally provides cargo handling facilities
        S_QUAY => "S.QUAY";
        /// traffic circle
        ///
        /// a road junction formed around a central circle about which traffic moves in one
        /// direction only
        S_RDCR => "S.RDCR";
        /// golf course
        ///
        /// a recreation field where golf is played
        S_RECG => "S.RECG";
        /// kapplöpningsbana
        ///
        /// a track where races are held
        S_RECR => "S.RECR";
        /// restaurang
        ///
        /// A place where meals are served to the public
        S_REST => "S.REST";
        /// store
        ///
        /// a building where goods and/or services are offered for sale
        S_RET => "S.RET";
        /// hvilehjem
        ///
        /// a structure maintained for the rest and shelter of travelers
        S_RHSE => "S.RHSE";
        /// djurkoloni
        ///
        /// a breeding place of a colony of birds or seals
        S_RKRY => "S.RKRY";
        /// religious site
        ///
        /// an ancient site of significant religious importance
        S_RLG => "S.RLG";
        /// fristad, tillflyktsort
        ///
        /// a place of temporary seclusion, especially for religious groups
        S_RLGR => "S.RLGR";
        /// ranch(er)
        ///
        /// a large farm specializing in extensive grazing of livestock
        S_RNCH => "S.RNCH";
        /// jernbanesidespor
        ///
        /// a short track parallel to and joining the main track
        S_RSD => "S.RSD";
        /// jernbanesignal
        ///
        /// a signal at the entrance of a particular section of track governing the movement of
        /// trains
        S_RSGNL => "S.RSGNL";
        /// feriested
        ///
        /// a specialized facility for vacation, health, or participation sports activities
        S_RSRT => "S.RSRT";
        /// jernbanestasjon
        ///
        /// a facility comprising ticket office, platforms, etc. for loading and unloading train
        /// passengers and freight
        S_RSTN => "S.RSTN";
        /// abandoned railroad station
        S_RSTNQ => "S.RSTNQ";
        /// jernbanestoppested
        ///
        /// a place lacking station facilities where trains stop to pick up and unload
        /// passengers and freight
        S_RSTP => "S.RSTP";
        /// abandoned railroad stop
        S_RSTPQ => "S.RSTPQ";
        /// ruin(er)
        ///
        /// a destroyed or decayed structure which is no longer functional
        S_RUIN => "S.RUIN";
        /// school
        ///
        /// building(s) where instruction in one or more branches of knowledge takes place
        S_SCH => "S.SCH";
        /// agricultural school
        ///
        /// a school with a curriculum focused on agriculture
        S_SCHA => "S.SCHA";
        /// college
        ///
        /// the grounds and buildings of an institution of higher learning
        S_SCHC => "S.SCHC";
        /// Driving School
        ///
        /// Driving School
        S_SCHD => "S.SCHD";
        /// Language School
        ///
        /// Language Schools &amp; Institutions
        S_SCHL => "S.SCHL";
        /// military school
        ///
        /// a school at which military science forms the core of the curriculum
        S_SCHM => "S.SCHM";
        /// maritime school
        ///
        /// a school at which maritime sciences form the core of the curriculum
        S_SCHN => "S.SCHN";
        /// technical school
        ///
        /// post-secondary school with a specifically technical or vocational curriculum
        S_SCHT => "S.SCHT";
        /// State Exam Prep Centre
        ///
        /// state exam preparation centres
        S_SECP => "S.SECP";
        /// fårfälla
        ///
        /// a fence or wall enclosure for sheep and other small herd animals
        S_SHPF => "S.SHPF";
        /// helgedom
        ///
        /// a structure or place memorializing a person or religious concept
        S_SHRN => "S.SHRN";
        /// lagerbygning
        ///
        /// a building for storing goods, especially provisions
        S_SHSE => "S.SHSE";
        /// sluice
        ///
        /// a conduit or passage for carrying off surplus water from a waterbody, usually
        /// regulated by means of a sluice gate
        S_SLCE => "S.SLCE";
        /// sanatorium
        ///
        /// a facility where victims of physical or mental disorders are treated
        S_SNTR => "S.SNTR";
        /// bad
        ///
        /// a resort area usually developed around a medicinal spring
        S_SPA => "S.SPA";
        /// dammavlopp
        ///
        /// a passage or outlet through which surplus water flows over, around or through a dam
        S_SPLY => "S.SPLY";
        /// plass
        ///
        /// a broad, open, public area near the center of a town or city
        S_SQR => "S.SQR";
        /// stable
        ///
        /// a building for the shelter and feeding of farm animals, especially horses
        S_STBL => "S.STBL";
        /// stadion
        ///
        /// a structure with an enclosure for athletic games with tiers of seats for spectators
        S_STDM => "S.STDM";
        /// forskningsbase
        ///
        /// a scientific facility used as a base from which research is carried out or monitored
        S_STNB => "S.STNB";
        /// coast guard station
        ///
        /// a facility from which the coast is guarded by armed vessels
        S_STNC => "S.STNC";
        /// eksperimentstasjon
        ///
        /// a facility for carrying out experiments
        S_STNE => "S.STNE";
        /// forest station
        ///
        /// a collection of buildings and facilities for carrying out forest management
        S_STNF => "S.STNF";
        /// inspection station
        ///
        /// a station at which vehicles, goods, and people are inspected
        S_STNI => "S.STNI";
        /// meteorological station
        ///
        /// a station at which weather elements are recorded
        S_STNM => "S.STNM";
        /// radio station
        ///
        /// a facility for producing and transmitting information by radio waves
        S_STNR => "S.STNR";
        /// satellite station
        ///
        /// a facility for tracking and communicating with orbiting satellites
        S_STNS => "S.STNS";
        /// hvalfangststasjon
        ///
        /// a facility for butchering whales and processing train oil
        S_STNW => "S.STNW";
        /// steps
        ///
        /// stones or slabs placed for ease in ascending or descending a steep slope
        S_STPS => "S.STPS";
        /// sewage treatment plant
        ///
        /// facility for the processing of sewage and/or wastewater
        S_SWT => "S.SWT";
        /// teater
        ///
        /// A building, room, or outdoor structure for the presentation of plays, films, or
        /// other dramatic performances
        S_THTR => "S.THTR";
        /// grav(ar)
        ///
        /// a structure for interring bodies
        S_TMB => "S.TMB";
        /// tempel
        ///
        /// an edifice dedicated to religious worship
        S_TMPL => "S.TMPL";
        /// cattle dipping tank
        ///
        /// a small artificial pond used for immersing cattle in chemically treated water for
        /// disease control
        S_TNKD => "S.TNKD";
        /// torn
        ///
        /// a high conspicuous structure, typically much higher than its diameter
        S_TOWR => "S.TOWR";
        /// transit terminal
        ///
        /// facilities for the handling of vehicular freight and passengers
        S_TRANT => "S.TRANT";
        /// triangulation station
        ///
        /// a point on the earth whose position has been determined by triangulation
        S_TRIG => "S.TRIG";
        /// oil pipeline terminal
        ///
        /// a tank farm or loading facility at the end of an oil pipeline
        S_TRMO => "S.TRMO";
        /// Temp Work Office
        ///
        /// Temporary Work Offices
        S_TWO => "S.TWO";
        /// postgrad &amp; MBA
        ///
        /// Post Universitary Education Institutes (post graduate studies and highly specialised
        /// master programs) &amp; MBA
        S_UNIO => "S.UNIO";
        /// University Prep School
        ///
        /// University Preparation Schools &amp; Institutions
        S_UNIP => "S.UNIP";
        /// universitet
        ///
        /// An institution for higher learning with teaching and research facilities
        /// constituting a graduate school and professional schools that award master&#39;s
        /// degrees and doctorates and an undergraduate division that awards bachelor&#39;s
        /// degrees.
        S_UNIV => "S.UNIV";
        /// amerikansk regeringsbyggnad
        ///
        /// a facility operated by the United States Government in Panama
        S_USGE => "S.USGE";
        /// veterinary facility
        ///
        /// a building or camp at which veterinary services are available
        S_VETF => "S.VETF";
        /// mur
        ///
        /// a thick masonry structure, usually enclosing a field or building, or forming the
        /// side of a structure
        S_WALL => "S.WALL";
        /// ancient wall
        ///
        /// the remains of a linear defensive stone structure
        S_WALLA => "S.WALLA";
        /// damm, fördämning
        ///
        /// a small dam in a stream, designed to raise the water level or to divert stream flow
        /// through a desired channel
        S_WEIR => "S.WEIR";
        /// kai
        ///
        /// a structure of open rather than solid construction along a shore or a bank which
        /// provides berthing for ships and cargo-handling facilities
        S_WHRF => "S.WHRF";
        /// vrak
        ///
        /// the site of the remains of a wrecked vessel
        S_WRCK => "S.WRCK";
        /// vannverk
        ///
        /// a facility for supplying potable water through a water source and a system of pumps
        /// and filtration beds
        S_WTRW => "S.WTRW";
        /// free trade zone
        ///
        /// an area, usually a section of a port, where goods may be received and shipped free
        /// of customs duty and of most customs regulations
        S_ZNF => "S.ZNF";
        /// dyrehage
        ///
        /// a zoological garden or park where wild animals are kept for exhibition
        S_ZOO => "S.ZOO";
        /// short name
        shortName => "shortName";
        /// mountain, hill, rock, ...
        T => "T";
        /// asfaltsjø
        ///
        /// a small basin containing naturally occurring asphalt
        T_ASPH => "T.ASPH";
        /// atoll(er)
        ///
        /// a ring-shaped coral reef which has closely spaced islands on it encircling a lagoon
        T_ATOL => "T.ATOL";
        /// bar
        ///
        /// a shallow ridge or mound of coarse unconsolidated material in a stream channel, at
        /// the mouth of a stream, estuary, or lagoon and in the wave-break zone along coasts
        T_BAR => "T.BAR";
        /// beach
        ///
        /// a shore zone of coarse unconsolidated sediment that extends from the low-water line
        /// to the highest reach of storm waves
        T_BCH => "T.BCH";
        /// beaches
        ///
        /// a shore zone of coarse unconsolidated sediment that extends from the low-water line
        /// to the highest reach of storm waves
        T_BCHS => "T.BCHS";
        /// badlands
        ///
        /// an area characterized by a maze of very closely spaced, deep, narrow, steep-sided
        /// ravines, and sharp crests and pinnacles
        T_BDLD => "T.BDLD";
        /// boulder field
        ///
        /// a high altitude or high latitude bare, flat area covered with large angular rocks
        T_BLDR => "T.BLDR";
        /// blowhole(s)
        ///
        /// a hole in coastal rock through which sea water is forced by a rising tide or waves
        /// and spurted through an outlet into the air
        T_BLHL => "T.BLHL";
        /// blowout(s)
        ///
        /// a small depression in sandy terrain, caused by wind erosion
        T_BLOW => "T.BLOW";
        /// avsats
        ///
        /// a long, narrow bedrock platform bounded by steeper slopes above and below, usually
        /// overlooking a waterbody
        T_BNCH => "T.BNCH";
        /// butte(s)
        ///
        /// a small, isolated, usually flat-topped hill with steep sides
        T_BUTE => "T.BUTE";
        /// cape
        ///
        /// a land area, more prominent than a point, projecting into the sea and marking a
        /// notable change in coastal direction
        T_CAPE => "T.CAPE";
        /// cleft(s)
        ///
        /// a deep narrow slot, notch, or groove in a coastal cliff
        T_CFT => "T.CFT";
        /// caldera
        ///
        /// a depression measuring kilometers across formed by the collapse of a volcanic
        /// mountain
        T_CLDA => "T.CLDA";
        /// brant klippa, stup
        ///
        /// a high, steep to perpendicular slope overlooking a waterbody or lower area
        T_CLF => "T.CLF";
        /// canyon
        ///
        /// a deep, narrow valley with steep sides cutting into a plateau or mountainous area
        T_CNYN => "T.CNYN";
        /// cone(s)
        ///
        /// a conical landform composed of mud or volcanic material
        T_CONE => "T.CONE";
        /// corridor
        ///
        /// a strip or area of land having significance as an access way
        T_CRDR => "T.CRDR";
        /// cirque
        ///
        /// a bowl-like hollow partially surrounded by cliffs or steep slopes at the head of a
        /// glaciated valley
        T_CRQ => "T.CRQ";
        /// cirques
        ///
        /// bowl-like hollows partially surrounded by cliffs or steep slopes at the head of a
        /// glaciated valley
        T_CRQS => "T.CRQS";
        /// crater(s)
        ///
        /// a generally circular saucer or bowl-shaped depression caused by volcanic or
        /// meteorite explosive action
        T_CRTR => "T.CRTR";
        /// backe
        ///
        /// an asymmetric ridge formed on tilted strata
        T_CUET => "T.CUET";
        /// delta
        ///
        /// a flat plain formed by alluvial deposits at the mouth of a stream
        T_DLTA => "T.DLTA";
        /// depression(er)
        ///
        /// a low area surrounded by higher land and usually characterized by interior drainage
        T_DPR => "T.DPR";
        /// desert
        ///
        /// a large area with little or no vegetation due to extreme environmental conditions
        T_DSRT => "T.DSRT";
        /// dune(s)
        ///
        /// a wave form, ridge or star shape feature composed of sand
        T_DUNE => "T.DUNE";
        /// divide
        ///
        /// a line separating adjacent drainage basins
        T_DVD => "T.DVD";
        /// sandy desert
        ///
        /// an extensive tract of shifting sand and sand dunes
        T_ERG => "T.ERG";
        /// avleiringsvifte
        ///
        /// a fan-shaped wedge of coarse alluvium with apex merging with a mountain stream bed
        /// and the fan spreading out at a low angle slope onto an adjacent plain
        T_FAN => "T.FAN";
        /// ford
        ///
        /// a shallow part of a stream which can be crossed on foot or by land vehicle
        T_FORD => "T.FORD";
        /// fissure
        ///
        /// a crack associated with volcanism
        T_FSR => "T.FSR";
        /// gap, öppning, hål, klyfta
        ///
        /// a low place in a ridge, not used for transportation
        T_GAP => "T.GAP";
        /// gorge(s)
        ///
        /// a short, narrow, steep-sided section of a stream valley
        T_GRGE => "T.GRGE";
        /// halvö,udde
        ///
        /// a high projection of land extending into a large body of water beyond the line of
        /// the coast
        T_HDLD => "T.HDLD";
        /// hill
        ///
        /// a rounded elevation of limited extent rising above the surrounding land with local
        /// relief of less than 300m
        T_HLL => "T.HLL";
        /// hills
        ///
        /// rounded elevations of limited extent rising above the surrounding land with local
        /// relief of less than 300m
        T_HLLS => "T.HLLS";
        /// hammock (stykker av hevet land)
        ///
        /// a patch of ground, distinct from and slightly above the surrounding plain or
        /// wetland. Often occurs in groups
        T_HMCK => "T.HMCK";
        /// klippöken
        ///
        /// a relatively sand-free, high bedrock plateau in a hot desert, with or without a
        /// gravel veneer
        T_HMDA => "T.HMDA";
        /// interfluve
        ///
        /// a relatively undissected upland between adjacent stream valleys
        T_INTF => "T.INTF";
        /// island
        ///
        /// a tract of land, smaller than a continent, surrounded by water at high water
        T_ISL => "T.ISL";
        /// islet
        ///
        /// small island, bigger than rock, smaller than island.
        T_ISLET => "T.ISLET";
        /// artificial island
        ///
        /// an island created by landfill or diking and filling in a wetland, bay, or lagoon
        T_ISLF => "T.ISLF";
        /// mangrove island
        ///
        /// a mangrove swamp surrounded by a waterbody
        T_ISLM => "T.ISLM";
        /// islands
        ///
        /// tracts of land, smaller than a continent, surrounded by water at high water
        T_ISLS => "T.ISLS";
        /// halvö
        ///
        /// a coastal island connected to the mainland by barrier beaches, levees or dikes
        T_ISLT => "T.ISLT";
        /// del av ö
        T_ISLX => "T.ISLX";
        /// isthmus
        ///
        /// a narrow strip of land connecting two larger land masses and bordered by water
        T_ISTH => "T.ISTH";
        /// karst area
        ///
        /// a distinctive landscape developed on soluble rock such as limestone characterized by
        /// sinkholes, caves, disappearing streams, and underground drainage
        T_KRST => "T.KRST";
        /// lava area
        ///
        /// an area of solidified lava
        T_LAVA => "T.LAVA";
        /// demning
        ///
        /// a natural low embankment bordering a distributary or meandering stream; often built
        /// up artificially to control floods
        T_LEV => "T.LEV";
        /// mesa(s)
        ///
        /// a flat-topped, isolated elevation with steep slopes on all sides, less extensive
        /// than a plateau
        T_MESA => "T.MESA";
        /// höjd(er)
        ///
        /// a low, isolated, rounded hill
        T_MND => "T.MND";
        /// moraine
        ///
        /// a mound, ridge, or other accumulation of glacial till
        T_MRN => "T.MRN";
        /// berg
        ///
        /// an elevation standing high above the surrounding area with small summit area, steep
        /// slopes and local relief of 300m or more
        T_MT => "T.MT";
        /// berg
        ///
        /// a mountain range or a group of mountains or high ridges
        T_MTS => "T.MTS";
        /// meander neck
        ///
        /// a narrow strip of land between the two limbs of a meander loop at its narrowest
        /// point
        T_NKM => "T.NKM";
        /// nunatak
        ///
        /// a rock or mountain peak protruding through glacial ice
        T_NTK => "T.NTK";
        /// nunataker
        ///
        /// rocks or mountain peaks protruding through glacial ice
        T_NTKS => "T.NTKS";
        /// aurhelle
        ///
        /// a near-level shallow, natural depression or basin, usually containing an
        /// intermittent lake, pond, or pool
        T_PAN => "T.PAN";
        /// aurheller
        ///
        /// a near-level shallow, natural depression or basin, usually containing an
        /// intermittent lake, pond, or pool
        T_PANS => "T.PANS";
        /// bergspass, trång väg(passage)
        ///
        /// a break in a mountain range or other high obstruction, used for transportation from
        /// one side to the other [See also gap]
        T_PASS => "T.PASS";
        /// halvö
        ///
        /// an elongate area of land projecting into a body of water and nearly surrounded by
        /// water
        T_PEN => "T.PEN";
        /// del av halvö
        T_PENX => "T.PENX";
        /// peak
        ///
        /// a pointed elevation atop a mountain, ridge, or other hypsographic feature
        T_PK => "T.PK";
        /// peaks
        ///
        /// pointed elevations atop a mountain, ridge, or other hypsographic features
        T_PKS => "T.PKS";
        /// plateau
        ///
        /// an elevated plain with steep slopes on one or more sides, and often with incised
        /// streams
        T_PLAT => "T.PLAT";
        /// del av platå
        T_PLATX => "T.PLATX";
        /// invallat landområde
        ///
        /// an area reclaimed from the sea by diking and draining
        T_PLDR => "T.PLDR";
        /// plain(s)
        ///
        /// an extensive area of comparatively level to gently undulating land, lacking surface
        /// irregularities, and usually adjacent to a higher area
        T_PLN => "T.PLN";
        /// del av slette
        T_PLNX => "T.PLNX";
        /// hög udde
        ///
        /// a bluff or prominent hill overlooking or projecting into a lowland
        T_PROM => "T.PROM";
        /// odde
        ///
        /// a tapering piece of land projecting into a body of water, less prominent than a cape
        T_PT => "T.PT";
        /// odder
        ///
        /// tapering pieces of land projecting into a body of water, less prominent than a cape
        T_PTS => "T.PTS";
        /// beach ridge
        ///
        /// a ridge of sand just inland and parallel to the beach, usually in series
        T_RDGB => "T.RDGB";
        /// ridge(s)
        ///
        /// a long narrow elevation with steep sides, and a more or less continuous crest
        T_RDGE => "T.RDGE";
        /// steinørken
        ///
        /// a desert plain characterized by a surface veneer of gravel and stones
        T_REG => "T.REG";
        /// klippa
        ///
        /// a conspicuous, isolated rocky mass
        T_RK => "T.RK";
        /// ras
        ///
        /// an irregular mass of fallen rock at the base of a cliff or steep slope
        T_RKFL => "T.RKFL";
        /// klipper
        ///
        /// conspicuous, isolated rocky masses
        T_RKS => "T.RKS";
        /// sand area
        ///
        /// a tract of land covered with sand
        T_SAND => "T.SAND";
        /// dry stream bed
        ///
        /// a channel formerly containing the water of a stream
        T_SBED => "T.SBED";
        /// brant sluttning
        ///
        /// a long line of cliffs or steep slopes separating level surfaces above and below
        T_SCRP => "T.SCRP";
        /// saddle
        ///
        /// a broad, open pass crossing a ridge or between hills or mountains
        T_SDL => "T.SDL";
        /// bredd
        ///
        /// a narrow zone bordering a waterbody which covers and uncovers at high and low water,
        /// respectively
        T_SHOR => "T.SHOR";
        /// jordfallshull
        ///
        /// a small crater-shape depression in a karst area
        T_SINK => "T.SINK";
        /// kana
        ///
        /// a mound of earth material, at the base of a slope and the associated scoured area
        T_SLID => "T.SLID";
        /// kontinentalskråning
        ///
        /// a surface with a relatively uniform slope angle
        T_SLP => "T.SLP";
        /// landtunga
        ///
        /// a narrow, straight or curved continuation of a beach into a waterbody
        T_SPIT => "T.SPIT";
        /// spur(s)
        ///
        /// a subordinate ridge projecting outward from a hill, mountain or other elevation
        T_SPUR => "T.SPUR";
        /// steinur
        ///
        /// a steep concave slope formed by an accumulation of loose rock fragments at the base
        /// of a cliff or steep slope
        T_TAL => "T.TAL";
        /// dal mellom sanddyner
        ///
        /// a long wind-swept trough between parallel longitudinal dunes
        T_TRGD => "T.TRGD";
        /// terass
        ///
        /// a long, narrow alluvial platform bounded by steeper slopes above and below, usually
        /// overlooking a waterbody
        T_TRR => "T.TRR";
        /// högland
        ///
        /// an extensive interior region of high land with low to moderate surface relief
        T_UPLD => "T.UPLD";
        /// dal
        ///
        /// an elongated depression usually traversed by a stream
        T_VAL => "T.VAL";
        /// hanging valley
        ///
        /// a valley the floor of which is notably higher than the valley or shore to which it
        /// leads; most common in areas that have been glaciated
        T_VALG => "T.VALG";
        /// dalar
        ///
        /// elongated depressions usually traversed by a stream
        T_VALS => "T.VALS";
        /// del av dal
        T_VALX => "T.VALX";
        /// volcano
        ///
        /// a conical elevation composed of volcanic materials with a crater at the top
        T_VLC => "T.VLC";
        /// undersea
        U => "U";
        /// apron
        ///
        /// a gentle slope, with a generally smooth surface, particularly found around groups of
        /// islands and seamounts
        U_APNU => "U.APNU";
        /// arch
        ///
        /// a low bulge around the southeastern end of the island of Hawaii
        U_ARCU => "U.ARCU";
        /// arrugado
        ///
        /// an area of subdued corrugations off Baja California
        U_ARRU => "U.ARRU";
        /// borderland
        ///
        /// a region adjacent to a continent, normally occupied by or bordering a shelf, that is
        /// highly irregular with depths well in excess of those typical of a shelf
        U_BDLU => "U.BDLU";
        /// banks
        ///
        /// elevations, typically located on a shelf, over which the depth of water is
        /// relatively shallow but sufficient for safe surface navigation
        U_BKSU => "U.BKSU";
        /// bench
        ///
        /// a small terrace
        U_BNCU => "U.BNCU";
        /// bank
        ///
        /// an elevation, typically located on a shelf, over which the depth of water is
        /// relatively shallow but sufficient for safe surface navigation
        U_BNKU => "U.BNKU";
        /// basin
        ///
        /// a depression more or less equidimensional in plan and of variable extent
        U_BSNU => "U.BSNU";
        /// bergskedja
        ///
        /// an entire mountain system including the subordinate ranges, interior plateaus, and
        /// basins
        U_CDAU => "U.CDAU";
        /// canyoner
        ///
        /// relatively narrow, deep depressions with steep sides, the bottom of which generally
        /// has a continuous slope
        U_CNSU => "U.CNSU";
        /// canyon
        ///
        /// a relatively narrow, deep depression with steep sides, the bottom of which generally
        /// has a continuous slope
        U_CNYU => "U.CNYU";
        /// continental rise
        ///
        /// a gentle slope rising from oceanic depths towards the foot of a continental slope
        U_CRSU => "U.CRSU";
        /// deep
        ///
        /// a localized deep area within the confines of a larger feature, such as a trough,
        /// basin or trench
        U_DEPU => "U.DEPU";
        /// kontinentalsokkelkant
        ///
        /// a line along which there is a marked increase of slope at the outer margin of a
        /// continental shelf or island shelf
        U_EDGU => "U.EDGU";
        /// brant sluttning
        ///
        /// an elongated and comparatively steep slope separating flat or gently sloping areas
        U_ESCU => "U.ESCU";
        /// avleiringsvifte
        ///
        /// a relatively smooth feature normally sloping away from the lower termination of a
        /// canyon or canyon system
        U_FANU => "U.FANU";
        /// flat
        ///
        /// a small level or nearly level area
        U_FLTU => "U.FLTU";
        /// fork
        ///
        /// a branch of a canyon or valley
        U_FRKU => "U.FRKU";
        /// forks
        ///
        /// a branch of a canyon or valley
        U_FRSU => "U.FRSU";
        /// bruddsone
        ///
        /// an extensive linear zone of irregular topography of the sea floor, characterized by
        /// steep-sided or asymmetrical ridges, troughs, or escarpments
        U_FRZU => "U.FRZU";
        /// fure
        ///
        /// a closed, linear, narrow, shallow depression
        U_FURU => "U.FURU";
        /// gap
        ///
        /// a narrow break in a ridge or rise
        U_GAPU => "U.GAPU";
        /// gully
        ///
        /// a small valley-like feature
        U_GLYU => "U.GLYU";
        /// hill
        ///
        /// an elevation rising generally less than 500 meters
        U_HLLU => "U.HLLU";
        /// hills
        ///
        /// elevations rising generally less than 500 meters
        U_HLSU => "U.HLSU";
        /// hole
        ///
        /// a small depression of the sea floor
        U_HOLU => "U.HOLU";
        /// knaus
        ///
        /// an elevation rising generally more than 500 meters and less than 1,000 meters and of
        /// limited extent across the summit
        U_KNLU => "U.KNLU";
        /// knauser
        ///
        /// elevations rising generally more than 500 meters and less than 1,000 meters and of
        /// limited extent across the summits
        U_KNSU => "U.KNSU";
        /// avsats
        ///
        /// a rocky projection or outcrop, commonly linear and near shore
        U_LDGU => "U.LDGU";
        /// damm
        ///
        /// an embankment bordering a canyon, valley, or seachannel
        U_LEVU => "U.LEVU";
        /// median valley
        ///
        /// the axial depression of the mid-oceanic ridge system
        U_MDVU => "U.MDVU";
        /// högplatå
        ///
        /// an isolated, extensive, flat-topped elevation on the shelf, with relatively steep
        /// sides
        U_MESU => "U.MESU";
        /// gravkulle
        ///
        /// a low, isolated, rounded hill
        U_MNDU => "U.MNDU";
        /// moat
        ///
        /// an annular depression that may not be continuous, located at the base of many
        /// seamounts, islands, and other isolated elevations
        U_MOTU => "U.MOTU";
        /// mountains
        ///
        /// well-delineated subdivisions of a large and complex positive feature
        U_MTSU => "U.MTSU";
        /// berg
        ///
        /// a well-delineated subdivision of a large and complex positive feature
        U_MTU => "U.MTU";
        /// peaks
        ///
        /// prominent elevations, part of a larger feature, either pointed or of very limited
        /// extent across the summit
        U_PKSU => "U.PKSU";
        /// peak
        ///
        /// a prominent elevation, part of a larger feature, either pointed or of very limited
        /// extent across the summit
        U_PKU => "U.PKU";
        /// platform
        ///
        /// a flat or gently sloping underwater surface extending seaward from the shore
        U_PLFU => "U.PLFU";
        /// plain
        ///
        /// a flat, gently sloping or nearly level region
        U_PLNU => "U.PLNU";
        /// plateau
        ///
        /// a comparatively flat-topped feature of considerable extent, dropping off abruptly on
        /// one or more sides
        U_PLTU => "U.PLTU";
        /// klippa
        ///
        /// a high tower or spire-shaped pillar of rock or coral, alone or cresting a summit
        U_PNLU => "U.PNLU";
        /// province
        ///
        /// a region identifiable by a group of similar physiographic features whose
        /// characteristics are markedly in contrast with surrounding areas
        U_PRVU => "U.PRVU";
        /// ravine
        ///
        /// a small canyon
        U_RAVU => "U.RAVU";
        /// ridge
        ///
        /// a long narrow elevation with steep sides
        U_RDGU => "U.RDGU";
        /// ridges
        ///
        /// long narrow elevations with steep sides
        U_RDSU => "U.RDSU";
        /// reefs
        ///
        /// surface-navigation hazards composed of consolidated material
        U_RFSU => "U.RFSU";
        /// reef
        ///
        /// a surface-navigation hazard composed of consolidated material
        U_RFU => "U.RFU";
        /// höjd
        ///
        /// a broad elevation that rises gently, and generally smoothly, from the sea floor
        U_RISU => "U.RISU";
        /// ramp
        ///
        /// a gentle slope connecting areas of different elevations
        U_RMPU => "U.RMPU";
        /// range
        ///
        /// a series of associated ridges or seamounts
        U_RNGU => "U.RNGU";
        /// havskanal
        ///
        /// a continuously sloping, elongated depression commonly found in fans or plains and
        /// customarily bordered by levees on one or two sides
        U_SCNU => "U.SCNU";
        /// havskanaler
        ///
        /// continuously sloping, elongated depressions commonly found in fans or plains and
        /// customarily bordered by levees on one or two sides
        U_SCSU => "U.SCSU";
        /// saddle
        ///
        /// a low part, resembling in shape a saddle, in a ridge or between contiguous seamounts
        U_SDLU => "U.SDLU";
        /// hylle
        ///
        /// a zone adjacent to a continent (or around an island) that extends from the low water
        /// line to a depth at which there is usually a marked increase of slope towards oceanic
        /// depths
        U_SHFU => "U.SHFU";
        /// grund, sandrev
        ///
        /// a surface-navigation hazard composed of unconsolidated material
        U_SHLU => "U.SHLU";
        /// sandbankar
        ///
        /// hazards to surface navigation composed of unconsolidated material
        U_SHSU => "U.SHSU";
        /// dal gjennom kontinentalhyllen
        ///
        /// a valley on the shelf, generally the shoreward extension of a canyon
        U_SHVU => "U.SHVU";
        /// sill
        ///
        /// the low part of a gap or saddle separating basins
        U_SILU => "U.SILU";
        /// skråning
        ///
        /// the slope seaward from the shelf edge to the beginning of a continental rise or the
        /// point where there is a general reduction in slope
        U_SLPU => "U.SLPU";
        /// seamounts
        ///
        /// elevations rising generally more than 1,000 meters and of limited extent across the
        /// summit
        U_SMSU => "U.SMSU";
        /// seamount
        ///
        /// an elevation rising generally more than 1,000 meters and of limited extent across
        /// the summit
        U_SMU => "U.SMU";
        /// spur
        ///
        /// a subordinate elevation, ridge, or rise projecting outward from a larger feature
        U_SPRU => "U.SPRU";
        /// terass
        ///
        /// a relatively flat horizontal or gently inclined surface, sometimes long and narrow,
        /// which is bounded by a steeper ascending slope on one side and by a steep descending
        /// slope on the opposite side
        U_TERU => "U.TERU";
        /// guyoter
        ///
        /// seamounts having a comparatively smooth, flat top
        U_TMSU => "U.TMSU";
        /// guyot
        ///
        /// a seamount having a comparatively smooth, flat top
        U_TMTU => "U.TMTU";
        /// landtunga
        ///
        /// an elongate (tongue-like) extension of a flat sea floor into an adjacent higher
        /// feature
        U_TNGU => "U.TNGU";
        /// gjennomgang
        ///
        /// a long depression of the sea floor characteristically flat bottomed and steep sided,
        /// and normally shallower than a trench
        U_TRGU => "U.TRGU";
        /// dike
        ///
        /// a long, narrow, characteristically very deep and asymmetrical depression of the sea
        /// floor, with relatively steep sides
        U_TRNU => "U.TRNU";
        /// dal
        ///
        /// a relatively shallow, wide depression, the bottom of which usually has a continuous
        /// gradient
        U_VALU => "U.VALU";
        /// dalar
        ///
        /// a relatively shallow, wide depression, the bottom of which usually has a continuous
        /// gradient
        U_VLSU => "U.VLSU";
        /// forest, heath, ...
        V => "V";
        /// bush(es)
        ///
        /// a small clump of conspicuous bushes in an otherwise bare area
        V_BUSH => "V.BUSH";
        /// cultivated area
        ///
        /// an area under cultivation
        V_CULT => "V.CULT";
        /// forest(s)
        ///
        /// an area dominated by tree vegetation
        V_FRST => "V.FRST";
        /// forsteinet skog
        ///
        /// a forest fossilized by geologic processes and now exposed at the earth&#39;s surface
        V_FRSTF => "V.FRSTF";
        /// grassland
        ///
        /// an area dominated by grass vegetation
        V_GRSLD => "V.GRSLD";
        /// coconut grove
        ///
        /// a planting of coconut trees
        V_GRVC => "V.GRVC";
        /// olive grove
        ///
        /// a planting of olive trees
        V_GRVO => "V.GRVO";
        /// palm grove
        ///
        /// a planting of palm trees
        V_GRVP => "V.GRVP";
        /// furulund
        ///
        /// a planting of pine trees
        V_GRVPN => "V.GRVPN";
        /// heath
        ///
        /// an upland moor or sandy area dominated by low shrubby vegetation including heather
        V_HTH => "V.HTH";
        /// eng
        ///
        /// a small, poorly drained area dominated by grassy vegetation
        V_MDW => "V.MDW";
        /// frukthage
        ///
        /// a planting of fruit or nut trees
        V_OCH => "V.OCH";
        /// buskterräng
        ///
        /// an area of low trees, bushes, and shrubs stunted by some environmental limitation
        V_SCRB => "V.SCRB";
        /// tre
        ///
        /// a conspicuous tree used as a landmark
        V_TREE => "V.TREE";
        /// tundra
        ///
        /// a marshy, treeless, high latitude plain, dominated by mosses, lichens, and low shrub
        /// vegetation under permafrost conditions
        V_TUND => "V.TUND";
        /// vineyard
        ///
        /// a planting of grapevines
        V_VIN => "V.VIN";
        /// vineyards
        ///
        /// plantings of grapevines
        V_VINS => "V.VINS";
        /// Wikipedia Article
        ///
        /// A Wikipedia article
        WikipediaArticle => "WikipediaArticle";
        /// wikipedia article
        ///
        /// A Wikipedia article of which subject is the resource.
        wikipediaArticle => "wikipediaArticle";
    }
}
