//! `mo:` namespace: The Music Ontology.
//!
//! Several local names differ only in case (`Activity` / `activity`); the
//! accessors keep the case of the local name so both remain addressable.

use crate::vocabulary;

vocabulary! {
    /// Music Ontology.
    pub struct MusicVocabulary;
    prefix = "mo";
    namespace = "http://purl.org/ontology/mo/";
    label = "The Music Ontology";
    family = Community;
    terms {
        /// The namespace itself, listed as a term of its own.
        NAMESPACE_IRI => "";
        /// activity
        ///
        /// An activity period, defining when an artist was musically active.
        Activity => "Activity";
        /// activity
        ///
        /// Relates an artist to an activity period
        activity => "activity";
        /// activity end
        ///
        /// Relates an artist to a date at which its activity ended
        activity_end => "activity_end";
        /// activity start
        ///
        /// Relates an artist to a date at which its activity started
        activity_start => "activity_start";
        /// album
        ///
        /// One or more track issued together. This is a type of MusicalManifestation defined by
        /// the musical industry.
        album => "album";
        /// amazon_asin
        ///
        /// Used to link a work or the expression of a work to its corresponding Amazon ASINs
        /// page.
        amazon_asin => "amazon_asin";
        /// analogue signal
        ///
        /// An analog signal.
        AnalogSignal => "AnalogSignal";
        /// arranged in
        ///
        /// Associates a work to an arrangement event where it was arranged
        arranged_in => "arranged_in";
        /// arrangement
        ///
        /// An arrangement event. Takes as agent the arranger, and produces a score
        /// (informational object, not the actually published score).
        Arrangement => "Arrangement";
        /// arrangement of
        ///
        /// Associates an arrangement event to a work
        arrangement_of => "arrangement_of";
        /// arranger
        Arranger => "Arranger";
        /// artist
        ///
        /// Relates a membership event with the corresponding artist
        artist => "artist";
        /// audio book
        ///
        /// Book read by a narrator without music. This is a type of MusicalManifestation
        /// defined by the musical industry.
        audiobook => "audiobook";
        /// audio file
        ///
        /// An audio file, which may be available on a local file system or through http, ftp,
        /// etc.
        AudioFile => "AudioFile";
        /// Relates a musical manifestation to a musical item (this album, and my particular
        /// cd). By using this property, there is no assumption on wether the full content is
        /// available on the linked item. To be explicit about this, you can use a sub-property,
        /// such as mo:item (the full manifestation is available on that item) or mo:preview
        /// (only a part of the manifestation is available on
        ///
        /// that item).
        available_as => "available_as";
        availableAs => "availableAs";
        /// biography
        ///
        /// Used to link an artist to their online biography.
        biography => "biography";
        /// Associates a digital signal to the number a bits used to encode one sample. Range is
        /// xsd:int.
        bitsPerSample => "bitsPerSample";
        /// bootleg
        ///
        /// An unofficial/underground musical work or the expression of a musical work that was
        /// not sanctioned by the artist and/or the corporate body.
        bootleg => "bootleg";
        /// bpm
        ///
        /// Indicates the BPM of a MusicalWork or a particular Performance Beats per minute: the
        /// pace of music measured by the number of beats occurring in 60 seconds.
        bpm => "bpm";
        /// catalogue number
        ///
        /// Links a release with the corresponding catalogue number
        catalogue_number => "catalogue_number";
        /// CD
        ///
        /// Compact Disc used as medium to record a musical manifestation.
        CD => "CD";
        /// Associates a signal to the number of channels it holds (mono --&gt; 1, stereo --&gt;
        /// 2). Range is xsd:int.
        channels => "channels";
        /// collaborated_with
        ///
        /// Used to relate two collaborating people on a work.
        collaborated_with => "collaborated_with";
        /// compilation
        ///
        /// Collection of previously released manifestations of a musical expression by one or
        /// more artists. This is a type of MusicalManifestation defined by the musical
        /// industry.
        compilation => "compilation";
        /// compilation_of
        ///
        /// Indicates that a musical manifestation is a compilation of several Signals.
        compilation_of => "compilation_of";
        /// compiled
        ///
        /// Used to relate an person or a group of person who compiled the manifestation of a
        /// musical work.
        compiled => "compiled";
        /// compiler
        ///
        /// Used to relate the manifestation of a musical work to a person or a group of person
        /// who compiled it.
        compiler => "compiler";
        /// composed in
        ///
        /// Associates a MusicalWork to the Composition event pertaining
        composed_in => "composed_in";
        /// composer
        Composer => "Composer";
        /// composer
        ///
        /// Associates a composition event to the actual composer. For example, this property
        /// could link the event corresponding to the composition of the Magic Flute in 1782 to
        /// Mozart himself (who obviously has a FOAF profile:-) ).
        composer => "composer";
        /// composition
        ///
        /// A composition event. Takes as agent the composer himself. It produces a MusicalWork,
        /// or a MusicalExpression (when the initial &quot;product&quot; is a score, for
        /// example), or both...
        Composition => "Composition";
        /// conducted
        ///
        /// Relates agents to the performances they were conducting
        conducted => "conducted";
        /// conductor
        Conductor => "Conductor";
        /// Relates a performance to the conductor involved
        conductor => "conductor";
        /// contains_sample_from
        ///
        /// Relates a signal to another signal, which has been sampled.
        contains_sample_from => "contains_sample_from";
        /// corporate body
        ///
        /// Organization or group of individuals and/or other organizations involved in the
        /// music market.
        CorporateBody => "CorporateBody";
        /// DAT
        ///
        /// Digital Audio Tape used as medium to record a musical manifestation.
        DAT => "DAT";
        /// DCC
        ///
        /// Digital Compact Cassette used as medium to record a musical manifestation.
        DCC => "DCC";
        /// derived from
        ///
        /// A related signal from which the described signal is derived.
        derived_from => "derived_from";
        /// digital signal
        ///
        /// A digital signal
        DigitalSignal => "DigitalSignal";
        /// discography
        ///
        /// Used to links an artist to an online discography of their musical works. The
        /// discography should provide a summary of each released musical work of the artist.
        discography => "discography";
        /// discogs
        ///
        /// Used to link a musical work or the expression of a musical work, an artist or a
        /// corporate body to to its corresponding Discogs page.
        discogs => "discogs";
        /// djmix_of
        ///
        /// Indicates that all (or most of) the tracks of a musical work or the expression of a
        /// musical work were mixed together from all (or most of) the tracks from another
        /// musical work or the expression of a musical work to form a so called DJ-Mix.
        djmix_of => "djmix_of";
        /// djmixed
        ///
        /// Used to relate an artist who djmixed a musical work or the expression of a musical
        /// work.
        djmixed => "djmixed";
        /// djmixed_by
        ///
        /// Used to relate a work or the expression of a work to an artist who djmixed it.
        djmixed_by => "djmixed_by";
        /// download
        ///
        /// This property can be used to link from a person to the website where they make their
        /// works available, or from
        download => "download";
        /// The duration of a track or a signal in ms
        duration => "duration";
        /// DVDA
        ///
        /// DVD-Audio used as medium to record a musical manifestation.
        DVDA => "DVDA";
        /// ean
        ///
        /// The European Article Number (EAN) is a universal identifier for products, commonly
        /// printed in form of barcodes on them. The numbers represented by those codes can
        /// either be 8 or 13 digits long, with the 13-digit-version being most common. EANs
        /// form a superset of the North American Universal Product Code (UPC) as every UPC can
        /// be made an EAN by adding a leading zero to it. Additionally every EAN is also a
        /// Japanese Article Number (JAN). The identifiers were formerly assigned by EAN
        /// International which merged with Uniform Code Council (UCC, the guys behind the UPCs)
        /// and Electronic Commerce Council of Canada (ECCC) to become GS1.
        ean => "ean";
        /// ED2K
        ///
        /// Something available on the E-Donkey peer-2-peer filesharing network
        ED2K => "ED2K";
        /// encodes
        ///
        /// Relates a MusicalItem (a track on a particular CD, an audio file, a stream
        /// somewhere) to the signal it encodes.
        encodes => "encodes";
        /// encoding
        ///
        /// Method used to convert analog electronic signals into digital format such as
        /// &quot;MP3 CBR @ 128kbps&quot;, &quot;OGG @ 160kbps&quot;, &quot;FLAC&quot;, etc.
        encoding => "encoding";
        /// Relates a performance or a recording to the engineer involved
        engineer => "engineer";
        /// engineered
        ///
        /// Relates agents to the performances/recordings they were engineering in
        engineered => "engineered";
        /// ep
        ///
        /// An EP
        ep => "ep";
        /// event homepage
        ///
        /// Links a particular event to a web page
        event_homepage => "event_homepage";
        eventHomePage => "eventHomePage";
        /// exchange_item
        ///
        /// A person, a group of person or an organization exchanging an exemplar of a single
        /// manifestation.
        exchange_item => "exchange_item";
        /// fanpage
        ///
        /// Used to link an artist to a fan-created webpage devoted to that artist.
        fanpage => "fanpage";
        /// Festival
        ///
        /// A festival - musical/artistic event lasting several days, like Glastonbury, Rock Am
        /// Ring... We migth decompose this event (which is in fact just a classification of the
        /// space/time region related to a particular festival) using hasSubEvent in several
        /// performances at different space/time.
        Festival => "Festival";
        /// free download
        ///
        /// This property can be used to link from a person to the website where they make their
        /// works available, or from a manifestation (a track or an album, for example) to a web
        /// page where it is available for free download.
        free_download => "free_download";
        freedownload => "freedownload";
        /// genre
        ///
        /// Associates an event (like a performance or a recording) to a particular musical
        /// genre. Further version of this property may also include works and scores in the
        /// domain.
        genre => "genre";
        /// Genre
        ///
        /// An expressive style of music.
        Genre => "Genre";
        /// GRid
        ///
        /// The Global Release Identifier (GRid) is a system for uniquely identifying Releases
        /// of music over electronic networks (that is, online stores where you can buy music as
        /// digital files). As that it can be seen as the equivalent of the BarCode (or more
        /// correctly the GTIN) as found on physical releases of music. Like the ISRC (a code
        /// for identifying single recordings as found on releases) it was developed by the IFPI
        /// but it does not appear to be a standard of the ISO.
        grid => "grid";
        /// group
        ///
        /// Relates a membership event with the corresponding group
        group => "group";
        /// gtin
        ///
        /// GTIN is a grouping term for EANs and UPCs. In common speech those are called
        /// barcodes although the barcodes are just a representation of those identifying
        /// numbers.
        gtin => "gtin";
        has_track => "has_track";
        /// headliner
        ///
        /// Relates a performance to the headliner(s) involved
        headliner => "headliner";
        /// homepage
        ///
        /// Links an artist, a record, etc. to a corresponding web page
        homepage => "homepage";
        /// image
        ///
        /// Indicates a pictorial image (JPEG, GIF, PNG, Etc.) of a musical work, the expression
        /// of a musical work, the manifestation of a work or the examplar of a manifestation.
        image => "image";
        /// imdb
        ///
        /// Used to link an artist, a musical work or the expression of a musical work to their
        /// equivalent page on IMDb, the InternetMovieDatabase.
        imdb => "imdb";
        /// Relates a performance to a musical instrument involved
        instrument => "instrument";
        /// Instrument
        ///
        /// Any of various devices or contrivances that can be used to produce musical tones or
        /// sound.
        Instrument => "Instrument";
        /// instrumentation
        ///
        /// Instrumentation deals with the techniques of writing music for a specific
        /// instrument, including the limitations of the instrument, playing techniques and
        /// idiomatic handling of the instrument.
        Instrumentation => "Instrumentation";
        /// has interpeter
        ///
        /// Adds an involved music artist, who interpreted, remixed, or otherwise modified an
        /// existing signal, which resulted in the signal that is here the subject of this
        /// relation.
        interpreter => "interpreter";
        /// interview
        ///
        /// Recording of the questioning of a person. This is a type of MusicalManifestation
        /// defined by the musical industry.
        interview => "interview";
        /// ipi
        ///
        /// The Interested Parties Information Code (IPI) is an ISO standard similar to ISBNs
        /// for identifying the people or groups with some involvement with a particular musical
        /// work / compositions.
        ipi => "ipi";
        /// ismn
        ///
        /// The International Standard Music Number (ISMN) is an ISO standard similar to ISBNs
        /// for identifying printed music publications
        ismn => "ismn";
        /// isrc
        ///
        /// The ISRC (International Standard Recording Code) is the international identification
        /// system for sound recordings and music videorecordings. Each ISRC is a unique and
        /// permanent identifier for a specific recording which can be permanently encoded into
        /// a product as its digital fingerprint. Encoded ISRC provide the means to
        /// automatically identify recordings for royalty payments.
        isrc => "isrc";
        /// iswc
        ///
        /// Links a musical work to the corresponding ISWC number
        iswc => "iswc";
        /// Relates a musical manifestation to a musical item (this album, and my particular cd)
        /// holding the entire manifestation, and not just a part of it.
        item => "item";
        /// key
        ///
        /// Indicated the key used by the musicians during a performance, or the key of a
        /// MusicalWork. Any of 24 major or minor diatonic scales that provide the tonal
        /// framework for a piece of music.
        key => "key";
        /// label
        ///
        /// Trade name of a company that produces musical works or expression of musical works.
        Label => "Label";
        /// label
        ///
        /// Associates a release event with the label releasing the record
        label => "label";
        /// lc
        ///
        /// The Label Code (LC) was introduced in 1977 by the IFPI (International Federation of
        /// Phonogram and Videogram Industries) in order to unmistakably identify the different
        /// record labels (see Introduction, Record labels) for rights purposes. The Label Code
        /// consists historically of 4 figures, presently being extended to 5 figures, preceded
        /// by LC and a dash (e.g. LC-0193 = Electrola; LC-0233 = His Master&#39;s Voice). Note
        /// that the number of countries using the LC is limited, and that the code given on the
        /// item is not always accurate.
        lc => "lc";
        /// level
        ///
        /// This annotation property associates to a particular Music Ontology term the
        /// corresponding expressiveness level. These levels can be:
        level => "level";
        /// libretto
        ///
        /// Libretto
        Libretto => "Libretto";
        /// licence
        ///
        /// Used to link a work or the expression of a work to the license under which they can
        /// be manipulated (downloaded, modified, etc).
        licence => "licence";
        /// listened
        ///
        /// Relates agents to the performances they were listening in
        listened => "listened";
        /// Relates a performance to the listener involved
        listener => "listener";
        /// listened
        Listener => "Listener";
        /// live
        ///
        /// A musical manifestation that was recorded live. This is a type of
        /// MusicalManifestation defined by the musical industry.
        live => "live";
        /// lyrics
        ///
        /// Lyrics
        Lyrics => "Lyrics";
        /// lyrics
        ///
        /// Associates lyrics with a musical work
        lyrics => "lyrics";
        /// MagneticTape
        ///
        /// Magnetic analogue tape used as medium to record a musical manifestation.
        MagneticTape => "MagneticTape";
        /// mailorder
        ///
        /// Used to link a musical work or the expression of a musical work to a website where
        /// people can buy a copy of the musical manifestation.
        mailorder => "mailorder";
        /// mashup_of
        ///
        /// Indicates that musical works or the expressions of a musical work were mashed up on
        /// this album or track.
        mashup_of => "mashup_of";
        /// MD
        ///
        /// Mini Disc used as medium to record a musical manifestation.
        MD => "MD";
        /// has media type
        ///
        /// The mediatype (file format or MIME type, or physical medium) of a musical
        /// manifestation, e.g. a MP3, CD or vinyl.
        media_type => "media_type";
        /// Medium
        ///
        /// A means or instrumentality for storing or communicating musical manifestation.
        Medium => "Medium";
        /// medley_of
        ///
        /// Indicates that a musical expression is a medley of several other musical
        /// expressions.
        medley_of => "medley_of";
        /// member
        ///
        /// Indicates a member of a musical group
        member => "member";
        /// member_of
        ///
        /// Inverse of the foaf:member property
        member_of => "member_of";
        /// membership
        ///
        /// A membership event, where one or several people belongs to a group during a
        /// particular time period.
        Membership => "Membership";
        /// membership
        ///
        /// Relates an agent with related membership events
        membership => "membership";
        /// meter
        ///
        /// Associates a musical work or a score with its meter
        meter => "meter";
        /// movement
        ///
        /// A movement is a self-contained part of a musical work. While individual or selected
        /// movements from a composition are sometimes performed separately, a performance of
        /// the complete work requires all the movements to be performed in succession.
        Movement => "Movement";
        /// has_movement
        ///
        /// Indicates that a musical work has movements
        movement => "movement";
        /// movement number
        ///
        /// Indicates the position of a movement in a musical work.
        movement_number => "movement_number";
        movementNum => "movementNum";
        /// musical expression
        ///
        /// The intellectual or artistic realization of a work in the form of alpha-numeric,
        /// musical, or choreographic notation, sound, etc., or any combination of such forms.
        MusicalExpression => "MusicalExpression";
        /// MusicalItem
        ///
        /// A single exemplar of a musical expression.
        MusicalItem => "MusicalItem";
        /// musical manifestation
        ///
        /// This entity is related to the edition/production/publication of a musical expression
        /// (musical manifestation are closely related with the music industry (their terms,
        /// concepts, definitions, methods (production, publication, etc.), etc.)
        MusicalManifestation => "MusicalManifestation";
        /// musical work
        ///
        /// Distinct intellectual or artistic musical creation.
        MusicalWork => "MusicalWork";
        /// music artist
        ///
        /// A person or a group of people (or a computer :-) ), whose musical creative work
        /// shows sensitivity and imagination
        MusicArtist => "MusicArtist";
        /// musicbrainz
        ///
        /// Linking an agent, a track or a record to its corresponding Musicbrainz page.
        musicbrainz => "musicbrainz";
        /// Musicbrainz GUID
        ///
        /// Links an object to the corresponding Musicbrainz identifier
        musicbrainz_guid => "musicbrainz_guid";
        /// music group
        ///
        /// Group of musicians, or musical ensemble, usually popular or folk, playing parts of
        /// or improvising off of a musical arrangement.
        MusicGroup => "MusicGroup";
        /// musicmoz
        ///
        /// Used to link an artist, a musical work or the expression of a musical work to its
        /// corresponding MusicMoz page.
        musicmoz => "musicmoz";
        /// myspace
        ///
        /// Used to link a person to its corresponding MySpace page.
        myspace => "myspace";
        /// official
        ///
        /// Any musical work or the expression of a musical work officially sanctioned by the
        /// artist and/or their corporate body.
        official => "official";
        /// olga
        ///
        /// Used to link a track to a tabulature file for track in the On-Line Guitar Archive.
        olga => "olga";
        /// onlinecommunity
        ///
        /// Used to link a person with an online community web page like a blog, a wiki, a
        /// forum, a livejournal page, Etc.
        onlinecommunity => "onlinecommunity";
        /// opus
        ///
        /// Used to define a creative work, especially a musical composition numbered to
        /// designate the order of a composer&#39;s works.
        opus => "opus";
        /// orchestration
        ///
        /// Orchestration includes, in addition to instrumentation, the handling of groups of
        /// instruments and their balance and interaction.
        Orchestration => "Orchestration";
        /// origin
        ///
        /// Relates an artist to its geographic origin
        origin => "origin";
        /// other_release_of
        ///
        /// Indicates that two musical manifestations are essentially the same.
        other_release_of => "other_release_of";
        /// paid download
        ///
        /// Provide a link from an artist to a web page where all of that artist&#39;s musical
        /// work is available for some money,
        paid_download => "paid_download";
        paiddownload => "paiddownload";
        /// performance
        ///
        /// A performance event. It might include as agents performers, engineers, conductors,
        /// or even listeners. It might include as factors a score, a MusicalWork, musical
        /// instruments.
        Performance => "Performance";
        /// performance of
        ///
        /// Associates a Performance to a musical work or an arrangement that is being used as a
        /// factor in it. For example, I might use this property to attach the Magic Flute
        /// musical work to a particular Performance.
        performance_of => "performance_of";
        /// performed
        ///
        /// Relates agents to the performances they were performing in
        performed => "performed";
        /// performed in
        ///
        /// Associates a Musical Work or an Score to Performances in which they were a factor.
        /// For example, I might use this property in order to associate the Magic Flute to a
        /// particular performance at the Opera Bastille last year.
        performed_in => "performed_in";
        /// Relates a performance to the performers involved
        performer => "performer";
        /// performer
        Performer => "Performer";
        /// possess_item
        ///
        /// A person, a group of person or an organization possessing an exemplar of a single
        /// manifestation.
        possess_item => "possess_item";
        /// Relates a musical manifestation to a musical item (this album, and my particular
        /// cd), which holds a preview of the manifestation (eg. one track for an album, or a
        /// snippet for a track)
        preview => "preview";
        /// preview download
        ///
        /// This property can be used to link from a person to the website where they make
        /// previews of their works available, or from a manifestation (a track or an album, for
        /// example) to a web page where a preview download is available.
        preview_download => "preview_download";
        /// primary instrument
        ///
        /// Indicates that an artist primarily plays an instrument, or that a member was
        /// primarily playing a particular instrument during his membership
        primary_instrument => "primary_instrument";
        /// produced
        ///
        /// Used to relate an person or a group of person who produced the manifestation of a
        /// work.
        produced => "produced";
        /// produced score
        ///
        /// Associates an arrangement or a composition event to a score product (score here does
        /// not refer to a published score, but more
        produced_score => "produced_score";
        /// produced signal
        ///
        /// Associates a Recording to the outputted signal.
        produced_signal => "produced_signal";
        /// produced signal group
        ///
        /// Associates a recording session with a group of master signals produced by it.
        produced_signal_group => "produced_signal_group";
        /// produced sound
        ///
        /// Associates a Performance to a physical Sound that is being produced by it.
        produced_sound => "produced_sound";
        /// produced work
        ///
        /// Associates a composition event to the produced MusicalWork. For example, this
        /// property could link the event corresponding to the composition of the Magic Flute in
        /// 1782 to the Magic Flute musical work itself. This musical work can then be used in
        /// particular performances.
        produced_work => "produced_work";
        /// producer
        ///
        /// Used to relate the manifestation of a work to a person or a group of person who
        /// produced it.
        producer => "producer";
        producesSignal => "producesSignal";
        producesSound => "producesSound";
        producesWork => "producesWork";
        productOfComposition => "productOfComposition";
        /// promotion
        ///
        /// A giveaway musical work or the expression of a musical work intended to promote an
        /// upcoming official musical work or the expression of a musical work.
        promotion => "promotion";
        /// publication of
        ///
        /// Link a particular manifestation to the related signal, score, libretto, or lyrics
        publication_of => "publication_of";
        publicationOf => "publicationOf";
        /// published
        ///
        /// Used to relate an person or a group of person who published the manifestation of a
        /// work.
        published => "published";
        /// published as
        ///
        /// Links a musical expression (e.g. a signal or a score) to one of its manifestations
        /// (e.g. a track on a particular record or a published score).
        published_as => "published_as";
        publishedAs => "publishedAs";
        /// published libretto
        ///
        /// A published libretto
        PublishedLibretto => "PublishedLibretto";
        /// published lyrics
        ///
        /// Published lyrics, as a book or as a text file, for example
        PublishedLyrics => "PublishedLyrics";
        /// published score
        ///
        /// A published score (subclass of MusicalManifestation)
        PublishedScore => "PublishedScore";
        /// publisher
        ///
        /// Used to relate a musical manifestation to a person or a group of person who
        /// published it.
        publisher => "publisher";
        /// publishingLocation
        ///
        /// Relates a musical manifestation to its publication location.
        publishing_location => "publishing_location";
        publishingLocation => "publishingLocation";
        /// puid
        ///
        /// Link a signal to the PUIDs associated with it, that is, PUID computed from
        /// MusicalItems (mo:AudioFile) derived from this signal. PUIDs (Portable Unique
        /// IDentifier) are the IDs used in the proprietary MusicDNS AudioFingerprinting system
        /// which is operated by MusicIP.
        puid => "puid";
        /// released record
        ///
        /// Associates a release with the records it contains. A single release can be
        /// associated with multiple records, for example for a multi-disc release.
        record => "record";
        /// record
        ///
        /// A published record (manifestation which first aim is to render the product of a
        /// recording)
        Record => "Record";
        /// record count
        ///
        /// Associates a release with the number of records it contains, e.g. the number of
        /// discs it contains in the case of a multi-disc release.
        record_count => "record_count";
        /// has record number
        ///
        /// Indicates the position of a record in a release (e.g. a 2xLP, etc.).
        record_number => "record_number";
        /// has record side
        ///
        /// Associates the side on a vinyl record, where a track is located, e.g. A, B, C, etc.
        /// This property can then also be used in conjunction with mo:track_number, so that one
        /// can infer e.g. &quot;A1&quot;, that means, track number 1 on side A.
        record_side => "record_side";
        /// recorded as
        ///
        /// This is a shortcut property, allowing to bypass all the Sound/Recording steps. This
        /// property allows to directly link a Performance to the recorded Signal. This is
        /// recommended for &quot;normal&quot; users. However, advanced users wanting to express
        /// things such as the location of the microphone will
        recorded_as => "recorded_as";
        /// recorded in
        ///
        /// Associates a physical Sound to a Recording event where it is being used in order to
        /// produce a signal. For example, I might use this property to associate the sound
        /// produced by a particular performance of the magic flute to a given recording, done
        /// using my cell-phone.
        recorded_in => "recorded_in";
        recordedAs => "recordedAs";
        /// recording
        ///
        /// A recording event. Takes a sound as a factor to produce a signal (analog or
        /// digital). The location of such events (if any) is the actual location of the
        /// corresponding
        Recording => "Recording";
        /// recorded sound
        ///
        /// Associates a Recording event to a physical Sound being recorded. For example, I
        /// might use this property to
        recording_of => "recording_of";
        /// recording session
        ///
        /// A set of performances/recordings/mastering events. This event can be decomposed in
        /// its constituent events using event:sub_event
        RecordingSession => "RecordingSession";
        /// records
        ///
        /// This is the inverse of the shortcut property recordedAs, allowing to relate directly
        /// a performance to a signal.
        records => "records";
        /// release
        ///
        /// Associates a release with the corresponding release event
        release => "release";
        /// release
        ///
        /// A specific release, with barcode, box, liner notes, cover art, and a number of
        /// records
        Release => "Release";
        /// Relates a musical manifestation to its release status (bootleg, ...)
        release_status => "release_status";
        /// Relates a musical manifestation to its release type (interview, spoken word, album,
        /// ...)
        release_type => "release_type";
        /// release event
        ///
        /// A release event, in a particular place (e.g. a country) at a particular time. Other
        /// factors of this event might include cover art, liner notes, box, etc. or a release
        /// grouping all these.
        ReleaseEvent => "ReleaseEvent";
        releaseStatus => "releaseStatus";
        /// release status
        ///
        /// Musical manifestation release status.
        ReleaseStatus => "ReleaseStatus";
        releaseType => "releaseType";
        /// Release type
        ///
        /// Release type of a particular manifestation, such as &quot;album&quot; or
        /// &quot;interview&quot;...
        ReleaseType => "ReleaseType";
        /// remaster_of
        ///
        /// This relates two musical work or the expression of a musical work, where one is a
        /// remaster of the other.
        remaster_of => "remaster_of";
        /// remix
        ///
        /// Musical manifestation that primarily contains remixed material. This is a type of
        /// MusicalManifestation defined by the musical industry.
        remix => "remix";
        /// remix_of
        ///
        /// Used to relate the remix of a musical work in a substantially altered version
        /// produced by mixing together individual tracks or segments of an original musical
        /// source work.
        remix_of => "remix_of";
        /// remixed
        ///
        /// Used to relate an artist who remixed a musical work or the expression of a musical
        /// work.
        remixed => "remixed";
        /// remixer
        ///
        /// Used to relate a musical work or the expression of a musical work to an artist who
        /// remixed it.
        remixer => "remixer";
        /// review
        ///
        /// Used to link a work or the expression of a work to a review.
        review => "review";
        /// SACD
        ///
        /// Super Audio Compact Disc used as medium to record a musical manifestation.
        SACD => "SACD";
        /// Associates a digital signal to its sample rate. It might be easier to express it
        /// this way instead of defining a timeline map:-) Range is xsd:float.
        sample_rate => "sample_rate";
        /// sampled
        ///
        /// Used to relate an artist who sampled a Signal.
        sampled => "sampled";
        /// sampled version
        ///
        /// Associates an analog signal with a sampled version of it
        sampled_version => "sampled_version";
        /// sampled version of
        ///
        /// Associates a digital signal with the analog version of it
        sampled_version_of => "sampled_version_of";
        sampledVersionOf => "sampledVersionOf";
        /// sampler
        ///
        /// Used to relate the signal of a musical work to an artist who sampled it.
        sampler => "sampler";
        sampleRate => "sampleRate";
        /// score
        ///
        /// Here, we are dealing with the informational object (the MusicalExpression), not the
        /// actually &quot;published&quot; score.
        Score => "Score";
        /// sell_item
        ///
        /// A person, a group of person or an organization selling an exemplar of a single
        /// manifestation.
        sell_item => "sell_item";
        /// Show
        ///
        /// A show - a musical event lasting several days, in a particular venue. Examples can
        /// be &quot;The Magic Flute&quot; at the Opera Bastille, August 2005, or a musical in
        /// the west end...
        Show => "Show";
        /// signal
        ///
        /// Associates a group of signals with one of the signals it contains
        signal => "signal";
        /// signal
        ///
        /// A subclass of MusicalExpression, representing a signal, for example a master signal
        /// produced by a performance and a recording.
        Signal => "Signal";
        /// signal group
        ///
        /// A musical expression representing a group of signals, for example a set of masters
        /// resulting from a whole recording/mastering session.
        SignalGroup => "SignalGroup";
        signalTime => "signalTime";
        /// similar_to
        ///
        /// A similarity relationships between two objects (so far, either an agent, a signal or
        /// a genre, but this could grow).
        similar_to => "similar_to";
        /// Relates a performance to an involved singer
        singer => "singer";
        /// single
        ///
        /// A single or record single is a type of release, typically a recording of two tracks.
        /// In most cases, the single is a song that is released separately from an album, but
        /// it can still appear on an album.
        single => "single";
        /// solo music artist
        ///
        /// Single person whose musical creative work shows sensitivity and imagination.
        SoloMusicArtist => "SoloMusicArtist";
        /// sound
        ///
        /// A subclass of MusicalExpression, representing a sound. Realisation of a MusicalWork
        /// during a musical Performance.
        Sound => "Sound";
        /// sound engineer
        SoundEngineer => "SoundEngineer";
        /// soundtrack
        ///
        /// Sound recording on a narrow strip of a motion picture film.
        soundtrack => "soundtrack";
        /// spoken word
        ///
        /// Spoken word is a form of music or artistic performance in which lyrics, poetry, or
        /// stories are spoken rather than sung.
        spokenword => "spokenword";
        /// Stream
        ///
        /// Transmission over a network  used as medium to broadcast a musical manifestation
        Stream => "Stream";
        /// supporting_musician
        ///
        /// Used to relate an artist doing long-time instrumental or vocal support for another
        /// artist.
        supporting_musician => "supporting_musician";
        /// tempo
        ///
        /// Rate of speed or pace of music. Tempo markings are traditionally given in Italian;
        /// common markings include: grave (solemn; very, very slow); largo (broad; very slow);
        tempo => "tempo";
        /// text
        ///
        /// Associates lyrics with their text.
        text => "text";
        /// time
        ///
        /// Associates a Signal to a time object - its actual domain
        time => "time";
        /// Torrent
        ///
        /// Something available on the Bittorrent peer-2-peer filesharing network
        Torrent => "Torrent";
        /// track
        ///
        /// Indicates a part of a musical manifestation - in this particular case, a track.
        track => "track";
        /// track
        ///
        /// A track on a particular record
        Track => "Track";
        /// track count
        ///
        /// The track count of a record
        track_count => "track_count";
        /// track number
        ///
        /// Indicates the position of a track on a record medium (a CD, etc.).
        track_number => "track_number";
        trackNum => "trackNum";
        /// transcription
        ///
        /// Transcription event
        Transcription => "Transcription";
        /// translation_of
        ///
        /// Indicates that a work or the expression of a work has translated or transliterated
        /// into another expression of a work.
        translation_of => "translation_of";
        /// tribute_to
        ///
        /// Indicates a musical work or the expression of a musical work that is a tribute to an
        /// artist - normally consisting of music being composed by the artist but performed by
        /// other artists.
        tribute_to => "tribute_to";
        /// trmid
        ///
        /// Indicates the TRMID of a track. TRM IDs are MusicBrainz&#39; old AudioFingerprinting
        /// system. TRM (TRM Recognizes Music) IDs are (somewhat) unique ids that represent
        trmid => "trmid";
        /// upc
        ///
        /// UPC stands for &quot;Universal Product Code&quot;, which was the original barcode
        /// used in the United States and Canada. The UPC (now officially EAN.UCC-12 is a
        /// numerical method of identifying products without redundancy worldwide for all types
        /// of products in the retail sector. The EAN is a superset of the original UPC
        /// increasing the digits to 13 with the prefix 0 reserved for UPC. As of 2005,
        /// manufacturers are only allowed to use the new 13-digit codes on their items, rather
        /// than having two separate numbers.
        upc => "upc";
        usedInPerformance => "usedInPerformance";
        usedInRecording => "usedInRecording";
        usesSound => "usesSound";
        usesWork => "usesWork";
        /// universally unique identifier
        ///
        /// Links an object to an universally unique identifier for it.
        uuid => "uuid";
        /// Vinyl
        ///
        /// Vinyl used as medium to record a musical manifestation
        Vinyl => "Vinyl";
        /// want_item
        ///
        /// A person, a group of person or an organization wanting an exemplar of a single
        /// manifestation.
        want_item => "want_item";
        /// wikipedia
        ///
        /// Used to link an work, an expression of a work, a manifestation of a work, a person,
        /// an instrument or a musical genre to its corresponding WikiPedia page. The full URL
        /// should be used, not just the WikiName.
        wikipedia => "wikipedia";
    }
}
