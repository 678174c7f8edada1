//! `gr:` namespace: GoodRelations e-commerce ontology.

use crate::vocabulary;

vocabulary! {
    /// GoodRelations vocabulary.
    pub struct GoodRelationsVocabulary;
    prefix = "gr";
    namespace = "http://purl.org/goodrelations/v1#";
    label = "The GoodRelations Vocabulary for E-Commerce";
    family = Community;
    terms {
        /// The namespace itself, listed as a term of its own.
        NAMESPACE_IRI => "";
        /// accepted payment methods (0..*)
        ///
        /// The gr:PaymentMethod or methods accepted by the gr:BusinessEntity for the given
        /// gr:Offering.
        acceptedPaymentMethods => "acceptedPaymentMethods";
        /// Actual product or service instance (DEPRECATED)
        ///
        /// DEPRECATED - This class is superseded by gr:Individual. Replace all occurrences of
        /// gr:ActualProductOrServiceInstance by gr:Individual, if possible.
        ActualProductOrServiceInstance => "ActualProductOrServiceInstance";
        /// add-on (0..*)
        ///
        /// This property points from a gr:Offering to additional offerings that can only be
        /// obtained in combination with the first offering. This can be used to model
        /// supplements and extensions that are available for a surcharge. Any
        /// gr:PriceSpecification attached to the secondary offering is to be understood as an
        /// additional charge.
        addOn => "addOn";
        /// advance booking requirement (0..1)
        ///
        /// The minimal and maximal amount of time that is required between accepting the
        /// gr:Offering and the actual usage of the resource or service. This is mostly relevant
        /// for offers regarding hotel rooms, the rental of objects, or the provisioning of
        /// services. The duration is specified relatively to the beginning of the usage of the
        /// contracted object. It is represented by attaching an instance of the class
        /// gr:QuantitativeValueInteger. The lower and upper boundaries are specified using the
        /// properties gr:hasMinValueInteger and gr:hasMaxValueInteger to that instance. The
        /// unit of measurement is specified using the property gr:hasUnitOfMeasurement with a
        /// string holding a UN/CEFACT code suitable for durations, e.g. MON (months), DAY
        /// (days), HUR (hours), or MIN (minutes).
        advanceBookingRequirement => "advanceBookingRequirement";
        /// American Express (payment method)
        ///
        /// Payment by credit or debit cards issued by the American Express network.
        AmericanExpress => "AmericanExpress";
        /// amount of this good (1..1)
        ///
        /// This property specifies the quantity of the goods included in the gr:Offering via
        /// this gr:TypeAndQuantityNode. The quantity is given in the unit of measurement
        /// attached to the gr:TypeAndQuantityNode.
        amountOfThisGood => "amountOfThisGood";
        /// applies to delivery method (0..*)
        ///
        /// This property specifies the gr:DeliveryMethod to which the
        /// gr:DeliveryChargeSpecification applies.
        appliesToDeliveryMethod => "appliesToDeliveryMethod";
        /// applies to payment method (1..*)
        ///
        /// This property specifies the gr:PaymentMethod to which the
        /// gr:PaymentChargeSpecification applies.
        appliesToPaymentMethod => "appliesToPaymentMethod";
        /// availability ends (0..1)
        ///
        /// This property specifies the end of the availability of the gr:ProductOrService
        /// included in the gr:Offering. The difference to the properties gr:validFrom and
        /// gr:validThrough is that those specify the period of time during which the offer is
        /// valid and can be accepted.
        availabilityEnds => "availabilityEnds";
        /// availability starts (0..1)
        ///
        /// This property specifies the beginning of the availability of the gr:ProductOrService
        /// included in the gr:Offering. The difference to the properties gr:validFrom and
        /// gr:validThrough is that those specify the period of time during which the offer is
        /// valid and can be accepted.
        availabilityStarts => "availabilityStarts";
        /// available at or from (0..*)
        ///
        /// This states that a particular gr:Offering is available at or from the given
        /// gr:Location (e.g. shop or branch).
        availableAtOrFrom => "availableAtOrFrom";
        /// available delivery methods (0..*)
        ///
        /// This specifies the gr:DeliveryMethod or methods available for a given gr:Offering.
        availableDeliveryMethods => "availableDeliveryMethods";
        /// billing increment (0..1)
        ///
        /// This property specifies the minimal quantity and rounding increment that will be the
        /// basis for the billing. The unit of measurement is specified by the UN/CEFACT code
        /// attached to the gr:UnitPriceSpecification via the gr:hasUnitOfMeasurement property.
        billingIncrement => "billingIncrement";
        /// Brand
        ///
        /// A brand is the identity of a specific product, service, or business. Use foaf:logo
        /// for attaching a brand logo and gr:name or rdfs:label for attaching the brand name.
        Brand => "Brand";
        /// Business (business entity type)
        ///
        /// The gr:BusinessEntityType representing such agents that are themselves offering
        /// commercial services or products on the market. Usually, businesses are characterized
        /// by the fact that they are officially registered with the public administration and
        /// strive for profits by their activities.
        Business => "Business";
        /// Business entity
        ///
        /// An instance of this class represents the legal agent making (or seeking) a
        /// particular offering. This can be a legal body or a person. A business entity has at
        /// least a primary mailing address and contact details. For this, typical address
        /// standards (vCard) and location data (geo, WGS84) can be attached. Note that the
        /// location of the business entity is not necessarily the location from which the
        /// product or service is being available (e.g. the branch or store). Use gr:Location
        /// for stores and branches.
        BusinessEntity => "BusinessEntity";
        /// Business entity type
        ///
        /// A business entity type is a conceptual entity representing the legal form, the size,
        /// the main line of business, the position in the value chain, or any combination
        /// thereof, of a gr:BusinessEntity. From the ontological point of view, business entity
        /// types are mostly roles that a business entity has in the market. Business entity
        /// types are important for specifying eligible customers, since a gr:Offering is often
        /// valid only for business entities of a certain size, legal structure, or role in the
        /// value chain.
        BusinessEntityType => "BusinessEntityType";
        /// Business function
        ///
        /// The business function specifies the type of activity or access (i.e., the bundle of
        /// rights) offered by the gr:BusinessEntity on the gr:ProductOrService through the
        /// gr:Offering. Typical are sell, rental or lease, maintenance or repair, manufacture /
        /// produce, recycle / dispose, engineering / construction, or installation.
        BusinessFunction => "BusinessFunction";
        /// Buy (business function, DEPRECATED)
        ///
        /// This gr:BusinessFunction indicates that the gr:BusinessEntity is in general
        /// interested in purchasing the specified gr:ProductOrService. DEPRECATED. Use gr:seeks
        /// instead.
        Buy => "Buy";
        /// By bank transfer in advance (payment method)
        ///
        /// Payment by bank transfer in advance, i.e., the offering gr:BusinessEntity will
        /// inform the buying party about their bank account details and will deliver the goods
        /// upon receipt of the due amount. This is equivalent to payment by wire transfer.
        ByBankTransferInAdvance => "ByBankTransferInAdvance";
        /// By invoice (payment method)
        ///
        /// Payment by bank transfer after delivery, i.e., the offering gr:BusinessEntity will
        /// deliver first, inform the buying party about the due amount and their bank account
        /// details, and expect payment shortly after delivery.
        ByInvoice => "ByInvoice";
        /// Cash (payment method)
        ///
        /// Payment by cash upon delivery or pickup.
        Cash => "Cash";
        /// category (0..*)
        ///
        /// The name of a category to which this gr:ProductOrService, gr:Offering,
        /// gr:BusinessEntity, or gr:Location belongs.
        category => "category";
        /// Check in advance (payment method)
        ///
        /// Payment by sending a check in advance, i.e., the offering gr:BusinessEntity will
        /// deliver the goods upon receipt of a check over the due amount. There are variations
        /// in handling payment by check - sometimes, shipment will be upon receipt of the check
        /// as a document, sometimes the shipment will take place only upon successful crediting
        /// of the check.
        CheckInAdvance => "CheckInAdvance";
        /// closes (1..1)
        ///
        /// The closing  hour of the gr:Location on the given gr:DayOfWeek. If no time-zone
        /// suffix is included, the time is given in the local time valid at the gr:Location.
        closes => "closes";
        /// COD (payment method)
        ///
        /// Collect on delivery / Cash on delivery - A payment method where the recipient of
        /// goods pays at the time of delivery. Usually, the amount of money is collected by the
        /// transportation company handling the goods.
        COD => "COD";
        /// color (0..1)
        ///
        /// The color of the product.
        color => "color";
        /// condition (0..1)
        ///
        /// A textual description of the condition of the product or service, or the products or
        /// services included in the offer (when attached to a gr:Offering)
        condition => "condition";
        /// Construction / installation (business function)
        ///
        /// This gr:BusinessFunction indicates that the gr:BusinessEntity offers (or seeks) the
        /// construction and/or installation of the specified gr:ProductOrService at the
        /// customer&#39;s location.
        ConstructionInstallation => "ConstructionInstallation";
        /// datatype product or service property (0..*)
        ///
        /// This property is the super property for all pure datatype properties that can be
        /// used to describe a gr:ProductOrService.
        datatypeProductOrServiceProperty => "datatypeProductOrServiceProperty";
        /// Day of week
        ///
        /// The day of the week, used to specify  to which day the opening hours of a
        /// gr:OpeningHoursSpecification refer.
        DayOfWeek => "DayOfWeek";
        /// Delivery charge specification
        ///
        /// A delivery charge specification is a conceptual entity that specifies the additional
        /// costs asked for the delivery of a given gr:Offering using a particular
        /// gr:DeliveryMethod by the respective gr:BusinessEntity. A delivery charge
        /// specification is characterized by (1) a monetary amount per order, specified as a
        /// literal value of type float in combination with a currency, (2) the delivery method,
        /// (3) the target country or region, and (4)  whether this charge includes local sales
        /// taxes, namely VAT. A gr:Offering may be linked to multiple
        /// gr:DeliveryChargeSpecification nodes that specify alternative charges for disjoint
        /// combinations of target countries or regions, and delivery methods.
        DeliveryChargeSpecification => "DeliveryChargeSpecification";
        /// delivery lead time (0..1)
        ///
        /// This property can be used to indicate the promised delay between the receipt of the
        /// order and the goods leaving the warehouse.
        deliveryLeadTime => "deliveryLeadTime";
        /// Delivery method
        ///
        /// A delivery method is a standardized procedure for transferring the product or
        /// service to the destination of fulfilment chosen by the customer. Delivery methods
        /// are characterized by the means of transportation used, and by the organization or
        /// group that is the contracting party for the sending gr:BusinessEntity (this is
        /// important, since the contracted party may subcontract the fulfilment to smaller,
        /// regional businesses).
        DeliveryMethod => "DeliveryMethod";
        /// Delivery mode direct download (delivery method)
        ///
        /// Delivery of the goods via direct download from the Internet, i.e., the offering
        /// gr:BusinessEntity provides the buying party with details on how to retrieve the
        /// goods online. Connection fees and other costs of using the infrastructure are to be
        /// carried by the buying party.
        DeliveryModeDirectDownload => "DeliveryModeDirectDownload";
        /// Delivery mode freight (delivery method)
        ///
        /// Delivery by an unspecified air, sea, or ground freight carrier or cargo company.
        DeliveryModeFreight => "DeliveryModeFreight";
        /// Delivery mode mail (delivery method)
        ///
        /// Delivery via regular mail service (private or public postal services).
        DeliveryModeMail => "DeliveryModeMail";
        /// Delivery mode own fleet (delivery method)
        ///
        /// Delivery of the goods by using a fleet of vehicles either owned and operated or
        /// subcontracted by the gr:BusinessEntity.
        DeliveryModeOwnFleet => "DeliveryModeOwnFleet";
        /// Delivery mode parcel service
        ///
        /// A private parcel service as the delivery mode available for a certain offering.
        DeliveryModeParcelService => "DeliveryModeParcelService";
        /// Delivery mode pick up (delivery method)
        ///
        /// Delivery of the goods by picking them up at one of the stores etc. (gr:Location)
        /// during the opening hours as specified by respective instances of
        /// gr:OpeningHoursSpecification.
        DeliveryModePickUp => "DeliveryModePickUp";
        /// depth (0..1)
        ///
        /// The depth of the product. Typical unit code(s): CMT for centimeters, INH for inches
        depth => "depth";
        /// description (0..1)
        ///
        /// A short textual description of the resource.
        description => "description";
        /// DHL (delivery method)
        ///
        /// Delivery via the parcel service DHL.
        DHL => "DHL";
        /// Diners Club (payment method)
        ///
        /// Payment by credit or debit cards issued by the Diner&#39;s Club network.
        DinersClub => "DinersClub";
        /// Direct debit (payment method)
        ///
        /// Payment by direct debit, i.e., the buying party will inform the offering
        /// gr:BusinessEntity about its bank account details and authorizes the
        /// gr:BusinessEntity to collect the agreed amount directly from that account.
        DirectDebit => "DirectDebit";
        /// Discover (payment method)
        ///
        /// Payment by credit or debit cards issued by the Discover network.
        Discover => "Discover";
        /// display position (0..1)
        ///
        /// The position at which the option or element should be listed in a menu or user
        /// dialog, lower numbers come first.
        displayPosition => "displayPosition";
        /// Dispose (business function)
        ///
        /// This gr:BusinessFunction indicates that the gr:BusinessEntity offers (or seeks) the
        /// acceptance of the specified gr:ProductOrService for proper disposal, recycling, or
        /// any other kind of allowed usages, freeing the current owner from all rights and
        /// obligations of ownership.
        Dispose => "Dispose";
        /// duration of warranty in months (0..1)
        ///
        /// This property specifies the duration of the gr:WarrantyPromise in months.
        durationOfWarrantyInMonths => "durationOfWarrantyInMonths";
        /// eligible customer types (0..*)
        ///
        /// The types of customers (gr:BusinessEntityType) for which the given gr:Offering is
        /// valid.
        eligibleCustomerTypes => "eligibleCustomerTypes";
        /// eligible duration (0..1)
        ///
        /// The minimal and maximal duration for which the given gr:Offering or gr:License is
        /// valid. This is mostly used for offers regarding accommodation, the rental of
        /// objects, or software licenses. The duration is specified by attaching an instance of
        /// gr:QuantitativeValue. The lower and upper boundaries are specified using the
        /// properties gr:hasMinValue and gr:hasMaxValue to that instance. If they are the same,
        /// use the gr:hasValue property. The unit of measurement is specified using the
        /// property gr:hasUnitOfMeasurement with a string holding a UN/CEFACT code suitable for
        /// durations, e.g. MON (months), DAY (days), HUR (hours), or MIN (minutes).
        eligibleDuration => "eligibleDuration";
        /// eligible regions (0..*)
        ///
        /// This property specifies the geo-political region or regions for which the
        /// gr:Offering, gr:License, or gr:DeliveryChargeSpecification is valid using the two-
        /// character version of ISO 3166-1 (ISO 3166-1 alpha-2)  for regions or ISO 3166-2 ,
        /// which breaks down the countries from ISO 3166-1 into administrative subdivisions.
        eligibleRegions => "eligibleRegions";
        /// eligible transaction volume (0..1)
        ///
        /// This property can be used to indicate the transaction volume, in a monetary unit,
        /// for which the gr:Offering or gr:PriceSpecification is valid. This is mostly used to
        /// specify a minimal purchasing volume, to express free shipping above a certain order
        /// volume, or to limit the acceptance of credit cards to purchases above a certain
        /// amount.
        eligibleTransactionVolume => "eligibleTransactionVolume";
        /// Enduser (business entity type)
        ///
        /// The gr:BusinessEntityType representing such agents that are purchasing the good or
        /// service for private consumption, in particular not for resale or for usage within an
        /// industrial enterprise. By default, a Business Entity is an Enduser.
        Enduser => "Enduser";
        /// equal (0..*)
        ///
        /// This ordering relation for qualitative values indicates that the subject is equal to
        /// the object.
        equal => "equal";
        /// Federal Express (delivery method)
        ///
        /// Delivery via the parcel service Federal Express.
        FederalExpress => "FederalExpress";
        /// Friday (day of week)
        ///
        /// Friday as a day of the week.
        Friday => "Friday";
        /// Google Checkout (payment method)
        ///
        /// Payment via the Google Checkout payment service.
        GoogleCheckout => "GoogleCheckout";
        /// greater (0..*)
        ///
        /// This ordering relation for qualitative values indicates that the subject is greater
        /// than the object.
        greater => "greater";
        /// greater or equal (0..*)
        ///
        /// This ordering relation for qualitative values indicates that the subject is greater
        /// than or equal to the object.
        greaterOrEqual => "greaterOrEqual";
        /// has brand (0..*)
        ///
        /// This specifies the brand or brands (gr:Brand) associated with a gr:ProductOrService,
        /// or the brand or brands maintained by a gr:BusinessEntity.
        hasBrand => "hasBrand";
        /// has business function (1..*)
        ///
        /// This specifies the business function of the gr:Offering, i.e. whether the
        /// gr:BusinessEntity is offering to sell, to lease, or to repair the particular type of
        /// product. In the case of bundles, it is also possible to attach individual business
        /// functions to each gr:TypeAndQuantityNode. The business function of the main
        /// gr:Offering determines the business function for all included objects or services,
        /// unless a business function attached to a gr:TypeAndQuantityNode overrides it.
        hasBusinessFunction => "hasBusinessFunction";
        /// has currency (1..1)
        ///
        /// The currency for all prices in the gr:PriceSpecification given using the ISO 4217
        /// standard (3 characters).
        hasCurrency => "hasCurrency";
        /// has currency value (0..1)
        ///
        /// This property specifies the amount of money for a price per unit, shipping charges,
        /// or payment charges. The currency and other relevant details are attached to the
        /// respective gr:PriceSpecification etc.
        hasCurrencyValue => "hasCurrencyValue";
        /// has DUNS (0..1)
        ///
        /// The Dun &amp; Bradstreet DUNS number for identifying a gr:BusinessEntity. The Dun
        /// &amp; Bradstreet DUNS is a nine-digit number used to identify legal entities (but
        /// usually not branches or locations of logistical importance only).
        hasDUNS => "hasDUNS";
        /// has EAN/UCC-13 (0..*)
        ///
        /// The EAN·UCC-13 code of the given gr:ProductOrService or gr:Offering. This code is
        /// now officially called GTIN-13 (Global Trade Identifier Number) or EAN·UCC-13. Former
        /// 12-digit UPC codes can be converted into EAN·UCC-13 code by simply adding a
        /// preceeding zero.
        hasEAN_UCC_13 => "hasEAN_UCC-13";
        /// has eligible quantity (0..1)
        ///
        /// This specifies the interval and unit of measurement of ordering quantities for which
        /// the gr:Offering or gr:PriceSpecification is valid. This allows e.g. specifying that
        /// a certain freight charge is valid only for a certain quantity. Note that if an
        /// offering is a bundle, i.e. it consists of more than one unit of a single type of
        /// good, or if the unit of measurement for the good is different from unit (Common Code
        /// C62), then gr:hasEligibleQuantity refers to units of this bundle. In other words,
        /// &quot;C62&quot; for &quot;Units or pieces&quot; is usually the appropriate unit of
        /// measurement.
        hasEligibleQuantity => "hasEligibleQuantity";
        /// has Global Location Number (0..1)
        ///
        /// The Global Location Number (GLN, sometimes also referred to as International
        /// Location Number or ILN) of the respective gr:BusinessEntity or gr:Location. The
        /// Global Location Number is a thirteen-digit number used to identify parties and
        /// physical locations.
        hasGlobalLocationNumber => "hasGlobalLocationNumber";
        /// has GTIN-14 (0..*)
        ///
        /// The Global Trade Item Number (GTIN-14) of the given gr:ProductOrService or
        /// gr:Offering.
        hasGTIN_14 => "hasGTIN-14";
        /// has GTIN-8 (0..*)
        ///
        /// The 8-digit Global Trade Item Number (GTIN-8) of the given gr:ProductOrService or
        /// gr:Offering, also known as EAN/UCC-8 (8-digit EAN).
        hasGTIN_8 => "hasGTIN-8";
        /// has inventory level (0..1)
        ///
        /// This property specifies the current approximate inventory level for gr:SomeItems.
        /// The unit of measurement and the point value or interval are indicated using the
        /// attached gr:QuantitativeValueFloat instance.
        hasInventoryLevel => "hasInventoryLevel";
        /// has ISIC v4 (0..*)
        ///
        /// The International Standard of Industrial Classification of All Economic Activities
        /// (ISIC), Revision 4 code for a particular gr:BusinessEntity or gr:Location. See
        /// http://unstats.un.org/unsd/cr/registry/isic-4.asp for more information.
        hasISICv4 => "hasISICv4";
        /// has make and model (0..1)
        ///
        /// This states that an actual product instance (gr:Individual) or a placeholder
        /// instance for multiple, unidentified such instances (gr:SomeItems) is one occurence
        /// of a particular gr:ProductOrServiceModel.
        hasMakeAndModel => "hasMakeAndModel";
        /// has manufacturer (0..1)
        ///
        /// This object property links a gr:ProductOrService to the gr:BusinessEntity that
        /// produces it. Mostly used with gr:ProductOrServiceModel.
        hasManufacturer => "hasManufacturer";
        /// has max currency value (1..1)
        ///
        /// This property specifies the UPPER BOUND of the amount of money for a price RANGE per
        /// unit, shipping charges, or payment charges. The currency and other relevant details
        /// are attached to the respective gr:PriceSpecification etc. For a
        /// gr:UnitPriceSpecification, this is the UPPER BOUND for the price for one unit or
        /// bundle (as specified in the unit of measurement of the unit price specification) of
        /// the respective gr:ProductOrService. For a gr:DeliveryChargeSpecification or a
        /// gr:PaymentChargeSpecification, it is the UPPER BOUND of the price per delivery or
        /// payment.
        hasMaxCurrencyValue => "hasMaxCurrencyValue";
        /// has max value (0..1)
        ///
        /// This property captures the upper limit of a gr:QuantitativeValue instance.
        hasMaxValue => "hasMaxValue";
        /// has max value float (1..1)
        ///
        /// This property captures the upper limit of a gr:QuantitativeValueFloat instance.
        hasMaxValueFloat => "hasMaxValueFloat";
        /// has max value integer (1..1)
        ///
        /// This property captures the upper limit of a gr:QuantitativeValueInteger instance.
        hasMaxValueInteger => "hasMaxValueInteger";
        /// has min currency value (1..1)
        ///
        /// This property specifies the LOWER BOUND of the amount of money for a price RANGE per
        /// unit, shipping charges, or payment charges. The currency and other relevant details
        /// are attached to the respective gr:PriceSpecification etc. For a
        /// gr:UnitPriceSpecification, this is the LOWER BOUND for the price for one unit or
        /// bundle (as specified in the unit of measurement of the unit price specification) of
        /// the respective gr:ProductOrService. For a gr:DeliveryChargeSpecification or a
        /// gr:PaymentChargeSpecification, it is the LOWER BOUND of the price per delivery or
        /// payment.
        hasMinCurrencyValue => "hasMinCurrencyValue";
        /// has min value (0..1)
        ///
        /// This property captures the lower limit of a gr:QuantitativeValue instance.
        hasMinValue => "hasMinValue";
        /// has min value float (1..1)
        ///
        /// This property captures the lower limit of a gr:QuantitativeValueFloat instance.
        hasMinValueFloat => "hasMinValueFloat";
        /// has min value integer (1..1)
        ///
        /// This property captures the lower limit of a gr:QuantitativeValueInteger instance.
        hasMinValueInteger => "hasMinValueInteger";
        /// has MPN (0..*)
        ///
        /// The Manufacturer Part Number or MPN is a unique identifier for a product, service,
        /// or bundle from the perspective of a particular manufacturer. MPNs can be assigned to
        /// products or product datasheets, or bundles. Accordingly, the domain of this property
        /// is the union of gr:ProductOrService (the common superclass of goods and datasheets),
        /// and gr:Offering.
        hasMPN => "hasMPN";
        /// has NAICS (0..*)
        ///
        /// The North American Industry Classification System (NAICS) code for a particular
        /// gr:BusinessEntity. See http://www.census.gov/eos/www/naics/ for more details.
        hasNAICS => "hasNAICS";
        /// has next (0..1)
        ///
        /// This ordering relation for gr:DayOfWeek indicates that the subject is directly
        /// followed by the object.
        hasNext => "hasNext";
        /// has opening hours day of week (1..*)
        ///
        /// This specifies the gr:DayOfWeek to which the gr:OpeningHoursSpecification is
        /// related.
        hasOpeningHoursDayOfWeek => "hasOpeningHoursDayOfWeek";
        /// has opening hours specification (0..*)
        ///
        /// This property links a gr:Location to a gr:OpeningHoursSpecification.
        hasOpeningHoursSpecification => "hasOpeningHoursSpecification";
        /// has POS (0..*)
        ///
        /// This property states that the respective gr:Location is a point of sale for the
        /// respective gr:BusinessEntity. It allows linking those two types of entities without
        /// the need for a particular gr:Offering.
        hasPOS => "hasPOS";
        /// has previous (0..1)
        ///
        /// This ordering relation for gr:DayOfWeek indicates that the subject is directly
        /// preceeded by the object.
        hasPrevious => "hasPrevious";
        /// has price specification (0..*)
        ///
        /// This links a gr:Offering to a gr:PriceSpecification or specifications. There can be
        /// unit price specifications, payment charge specifications, and delivery charge
        /// specifications. For each type, multiple specifications for the same gr:Offering are
        /// possible, e.g. for different quantity ranges or for different currencies, or for
        /// different combinations of gr:DeliveryMethod and target destinations.
        hasPriceSpecification => "hasPriceSpecification";
        /// has Stock Keeping Unit (0..*)
        ///
        /// The Stock Keeping Unit, or SKU is a unique identifier for a product, service, or
        /// bundle from the perspective of a particular supplier, i.e. SKUs are mostly assigned
        /// and serialized at the merchant level.
        hasStockKeepingUnit => "hasStockKeepingUnit";
        /// has unit of measurement (1..1)
        ///
        /// The unit of measurement for a gr:QuantitativeValue, a gr:UnitPriceSpecification, or
        /// a gr:TypeAndQuantityNode given using the UN/CEFACT Common Code (3 characters).
        hasUnitOfMeasurement => "hasUnitOfMeasurement";
        /// has value (0..1)
        ///
        /// This subproperty specifies that the upper and lower limit of the given
        /// gr:QuantitativeValue are identical and have the respective value. It is a shortcut
        /// for such cases where a quantitative property is (at least practically) a single
        /// point value and not an interval.
        hasValue => "hasValue";
        /// has value float (0..1)
        ///
        /// This subproperty specifies that the upper and lower limit of the given
        /// gr:QuantitativeValueFloat are identical and have the respective float value. It is a
        /// shortcut for such cases where a quantitative property is (at least practically) a
        /// single point value and not an interval.
        hasValueFloat => "hasValueFloat";
        /// has value integer (0..1)
        ///
        /// This subproperty specifies that the upper and lower limit of the given
        /// gr:QuantitativeValueInteger are identical and have the respective integer value. It
        /// is a shortcut for such cases where a quantitative property is (at least practically)
        /// a single point value and not an interval.
        hasValueInteger => "hasValueInteger";
        /// has warranty promise (0..*)
        ///
        /// This specifies the gr:WarrantyPromise made by the gr:BusinessEntity for the given
        /// gr:Offering.
        hasWarrantyPromise => "hasWarrantyPromise";
        /// has warranty scope (0..1)
        ///
        /// This states the gr:WarrantyScope of a given gr:WarrantyPromise.
        hasWarrantyScope => "hasWarrantyScope";
        /// height (0..1)
        ///
        /// The height of the product. Typical unit code(s): CMT for centimeters, INH for inches
        height => "height";
        /// includes (0..1)
        ///
        /// This object property is a shortcut for the original gr:includesObject property for
        /// the common case of having exactly one single gr:ProductOrService instance included
        /// in an Offering.
        includes => "includes";
        /// includes object (0..*)
        ///
        /// This object property links a gr:Offering to one or multiple gr:TypeAndQuantityNode
        /// or nodes that specify the components that are included in the respective offer.
        includesObject => "includesObject";
        /// Individual
        ///
        /// A gr:Individual is an actual product or service instance, i.e., a single
        /// identifiable object or action that creates some increase in utility (in the economic
        /// sense) for the individual possessing or using this very object (product) or for the
        /// individual in whose favor this very action is being taken (service). Products or
        /// services are types of goods in the economic sense. For an overview of goods and
        /// commodities in economics, see Milgate (1987).
        Individual => "Individual";
        /// is accessory or spare part for (0..*)
        ///
        /// This states that a particular gr:ProductOrService is an accessory or spare part for
        /// another product or service.
        isAccessoryOrSparePartFor => "isAccessoryOrSparePartFor";
        /// is consumable for (0..*)
        ///
        /// This states that a particular gr:ProductOrService is a consumable for another
        /// product or service.
        isConsumableFor => "isConsumableFor";
        /// is list price (DEPRECATED)
        ///
        /// This boolean attribute indicates whether a gr:UnitPriceSpecification is a list price
        /// (usually a vendor recommendation) or not. &quot;true&quot;  indicates it is a list
        /// price, &quot;false&quot; indicates it is not. DEPRECATED. Use the gr:priceType
        /// property instead.
        isListPrice => "isListPrice";
        /// is similar to (0..*)
        ///
        /// This states that a given gr:ProductOrService is similar to another product or
        /// service. Of course, this is a subjective statement; when interpreting it, the trust
        /// in the origin of the statement should be taken into account.
        isSimilarTo => "isSimilarTo";
        /// is variant of (0..1)
        ///
        /// This states that a particular gr:ProductOrServiceModel is a variant of another
        /// product or service model. It is pretty safe to infer that the variant inherits all
        /// gr:quantitativeProductOrServiceProperty, gr:qualitativeProductOrServiceProperty, and
        /// gr:datatypeProductOrServiceProperty values that are defined for the first
        /// gr:ProductOrServiceModel.
        isVariantOf => "isVariantOf";
        /// JCB (payment method)
        ///
        /// Payment by credit or debit cards issued by the JCB network.
        JCB => "JCB";
        /// Labor / bring-in (warranty scope)
        ///
        /// In case of a defect or malfunction, the buying party has the right to transport the
        /// good to a service location determined by the the selling gr:BusinessEntity and will
        /// be charged only for parts and materials needed to fix the problem. Labor will be
        /// covered by the selling business entity or one of its partnering business entities.
        Labor_BringIn => "Labor-BringIn";
        /// Lease Out (business function)
        ///
        /// This gr:BusinessFunction indicates that the gr:BusinessEntity offers (or seeks) the
        /// temporary right to use the specified gr:ProductOrService.
        LeaseOut => "LeaseOut";
        /// legal name (0..1)
        ///
        /// The legal name of the gr:BusinessEntity.
        legalName => "legalName";
        /// lesser (0..*)
        ///
        /// This ordering relation for gr:QualitativeValue pairs indicates that the subject is
        /// lesser than the object.
        lesser => "lesser";
        /// lesser or equal (0..*)
        ///
        /// This ordering relation for gr:QualitativeValue pairs indicates that the subject is
        /// lesser than or equal to the object.
        lesserOrEqual => "lesserOrEqual";
        /// License
        ///
        /// A license is the specification of a bundle of rights that determines the type of
        /// activity or access offered by the gr:BusinessEntity on the gr:ProductOrService
        /// through the gr:Offering.
        License => "License";
        /// Location
        ///
        /// A location is a point or area of interest from which a particular product or service
        /// is available, e.g. a store, a bus stop, a gas station, or a ticket booth. The
        /// difference to gr:BusinessEntity is that the gr:BusinessEntity is the legal entity
        /// (e.g. a person or corporation) making the offer, while gr:Location is the store,
        /// office, or place. A chain restaurant will e.g. have one legal entity but multiple
        /// restaurant locations. Locations are characterized by an address or geographical
        /// position and a set of opening hour specifications for various days of the week.
        Location => "Location";
        /// Location of sales or service provisioning (DEPRECATED)
        ///
        /// DEPRECATED - This class is superseded by gr:Location. Replace all occurrences of
        /// gr:LocationOfSalesOrServiceProvisioning by gr:Location, if possible.
        LocationOfSalesOrServiceProvisioning => "LocationOfSalesOrServiceProvisioning";
        /// Maintain (business function)
        ///
        /// This gr:BusinessFunction indicates that the gr:BusinessEntity offers (or seeks)
        /// typical maintenance tasks for the specified gr:ProductOrService. Maintenance tasks
        /// are actions that undo or compensate for wear or other deterioriation caused by
        /// regular usage, in order to restore the originally intended function of the product,
        /// or to prevent outage or malfunction.
        Maintain => "Maintain";
        /// MasterCard (payment method)
        ///
        /// Payment by credit or debit cards issued by the MasterCard network.
        MasterCard => "MasterCard";
        /// Monday (day of week)
        ///
        /// Monday as a day of the week.
        Monday => "Monday";
        /// N-ary relations (DEPRECATED)
        ///
        /// This is the superclass for all classes that are placeholders for n-ary relations,
        /// which OWL cannot represent. DEPRECATED. Do not use this class in data or queries.
        N_Ary_Relations => "N-Ary-Relations";
        /// name (0..1)
        ///
        /// A short text describing the respective resource.
        name => "name";
        /// non equal (0..*)
        ///
        /// This ordering relation for gr:QualitativeValue pairs indicates that the subject is
        /// not equal to the object.
        nonEqual => "nonEqual";
        /// Offering
        ///
        /// An offering represents the public, not necessarily binding, not necessarily
        /// exclusive, announcement by a gr:BusinessEntity to provide (or seek) a certain
        /// gr:BusinessFunction for a certain gr:ProductOrService to a specified target
        /// audience. An offering is specified by the type of product or service or bundle it
        /// refers to, what business function is being offered (sales, rental, ...), and a set
        /// of commercial properties. It can either refer to (1) a clearly specified instance
        /// (gr:Individual), (2) to a set of anonymous instances of a given type (gr:SomeItems),
        /// (3) a product model specification (gr:ProductOrServiceModel), see also section 3.3.3
        /// of the GoodRelations Technical Report.
        Offering => "Offering";
        /// offers (0..*)
        ///
        /// This links a gr:BusinessEntity to the offers (gr:Offering) it makes. If you want to
        /// express interest in receiving offers, use gr:seeks instead.
        offers => "offers";
        /// Opening hours specification
        ///
        /// This is a conceptual entity that holds together all information about the opening
        /// hours on a given day (gr:DayOfWeek).
        OpeningHoursSpecification => "OpeningHoursSpecification";
        /// opens (1..1)
        ///
        /// The opening hour of the gr:Location on the given gr:DayOfWeek. If no time-zone
        /// suffix is included, the time is given in the local time valid at the gr:Location.
        opens => "opens";
        /// owns (0..*)
        ///
        /// This property indicates that a particular person or business owns a particular
        /// product. It can be used to expose the products in one&#39;s posession in order to
        /// empower recommender systems to suggest matching offers.
        owns => "owns";
        /// Parts and labor / bring-in (warranty scope)
        ///
        /// In case of a defect or malfunction, the buying party has the right to transport the
        /// good to a service location determined by the the selling gr:BusinessEntity and will
        /// not be be charged for labor, parts, and materials needed to fix the problem. All
        /// those costs will be covered by the selling business entity or one of its partnering
        /// business entities.
        PartsAndLabor_BringIn => "PartsAndLabor-BringIn";
        /// Parts and labor / pick up (warranty scope)
        ///
        /// In case of a defect or malfunction, the buying party has the right to request from
        /// the selling gr:Business Entity to pick-up the good from its current location to a
        /// suitable service location, where the functionality of the good will be restored. All
        /// transportation, labor, parts, and materials needed to fix the problem will be
        /// covered by the selling business entity or one of its partnering business entities.
        PartsAndLabor_PickUp => "PartsAndLabor-PickUp";
        /// Payment charge specification
        ///
        /// A payment charge specification is a conceptual entity that specifies the additional
        /// costs asked for settling the payment after accepting a given gr:Offering using a
        /// particular gr:PaymentMethod. A payment charge specification is characterized by (1)
        /// a monetary amount per order specified as a literal value of type float in
        /// combination with a Currency, (2) the payment method, and (3) a whether this charge
        /// includes local sales taxes, namely VAT. A gr:Offering may be linked to multiple
        /// payment charge specifications that specify alternative charges for various payment
        /// methods.
        PaymentChargeSpecification => "PaymentChargeSpecification";
        /// Payment method
        ///
        /// A payment method is a standardized procedure for transferring the monetary amount
        /// for a purchase. Payment methods are characterized by the legal and technical
        /// structures used, and by the organization or group carrying out the transaction. This
        /// element is mostly used for specifying the types of payment accepted by a
        /// gr:BusinessEntity.
        PaymentMethod => "PaymentMethod";
        /// Payment method credit card
        ///
        /// The subclass of gr:PaymentMethod represents all variants and brands of credit or
        /// debit cards as a standardized procedure for transferring the monetary amount for a
        /// purchase. It is mostly used for specifying the types of payment accepted by a
        /// gr:Business Entity.
        PaymentMethodCreditCard => "PaymentMethodCreditCard";
        /// PayPal (payment method)
        ///
        /// Payment via the PayPal payment service.
        PayPal => "PayPal";
        /// PaySwarm (payment method)
        ///
        /// Payment via the PaySwarm distributed micropayment service.
        PaySwarm => "PaySwarm";
        /// predecessor of (0..*)
        ///
        /// This property indicates that the subject is a previous, often discontinued variant
        /// of the gr:ProductOrServiceModel used as the object.
        predecessorOf => "predecessorOf";
        /// Price specification
        ///
        /// The superclass of all price specifications.
        PriceSpecification => "PriceSpecification";
        /// price type (0..1)
        ///
        /// This attribute can be used to distinguish multiple different price specifications
        /// for the same gr:Offering. It supersedes the former gr:isListPrice property. The
        /// following values are recommended:
        priceType => "priceType";
        /// Product or service
        ///
        /// The superclass of all classes describing products or services types, either by
        /// nature or purpose. Examples for such subclasses are &quot;TV set&quot;, &quot;vacuum
        /// cleaner&quot;, etc. An instance of this class can be either an actual product or
        /// service (gr:Individual), a placeholder instance for unknown instances of a mass-
        /// produced commodity (gr:SomeItems), or a model / prototype specification
        /// (gr:ProductOrServiceModel). When in doubt, use gr:SomeItems.
        ProductOrService => "ProductOrService";
        /// Product or service model
        ///
        /// A product or service model is a intangible entity that specifies some
        /// characteristics of a group of similar, usually mass-produced products, in the sense
        /// of a prototype. In case of mass-produced products, there exists a relation
        /// gr:hasMakeAndModel between the actual product or service (gr:Individual or
        /// gr:SomeItems) and the prototype (gr:ProductOrServiceModel). GoodRelations treats
        /// product or service models as &quot;prototypes&quot; instead of a completely separate
        /// kind of entities, because this allows using the same domain-specific properties
        /// (e.g. gr:weight) for describing makes and models and for describing actual products.
        ProductOrServiceModel => "ProductOrServiceModel";
        /// Product or services some instances placeholder (DEPRECATED)
        ///
        /// DEPRECATED - This class is superseded by gr:SomeItems. Replace all occurrences of
        /// gr:ProductOrServicesSomeInstancesPlaceholder by gr:SomeItems, if possible.
        ProductOrServicesSomeInstancesPlaceholder => "ProductOrServicesSomeInstancesPlaceholder";
        /// Provide service (business function)
        ///
        /// This gr:BusinessFunction indicates that the gr:BusinessEntity offers (or seeks) the
        /// respective type of service.
        ProvideService => "ProvideService";
        /// Public holidays (day of week)
        ///
        /// A placeholder for all official public holidays at the gr:Location. This allows
        /// specifying the opening hours on public holidays. If a given day is a public holiday,
        /// this specification supersedes the opening hours for the respective day of the week.
        PublicHolidays => "PublicHolidays";
        /// Public institution (business entity type)
        ///
        /// The gr:BusinessEntityType representing such agents that are part of the
        /// adminstration or owned by the public.
        PublicInstitution => "PublicInstitution";
        /// qualitative product or service property (0..*)
        ///
        /// This is the super property of all qualitative properties for products and services.
        /// All properties in product or service ontologies for which gr:QualitativeValue
        /// instances are specified are subproperties of this property.
        qualitativeProductOrServiceProperty => "qualitativeProductOrServiceProperty";
        /// Qualitative value
        ///
        /// A qualitative value is a predefined value for a product characteristic.
        QualitativeValue => "QualitativeValue";
        /// quantitative product or service property (0..*)
        ///
        /// This is the super property of all quantitative  properties for products and
        /// services. All properties in product or service ontologies that specify quantitative
        /// characteristics, for which an interval is at least theoretically an appropriate
        /// value, are subproperties of this property.
        quantitativeProductOrServiceProperty => "quantitativeProductOrServiceProperty";
        /// Quantitative value
        ///
        /// A quantitative value is a numerical interval that represents the range of a certain
        /// gr:quantitativeProductOrServiceProperty in terms of the lower and upper bounds for a
        /// particular gr:ProductOrService. It is to be interpreted in combination with the
        /// respective unit of measurement. Most quantitative values are intervals even if they
        /// are in practice often treated as a single point value.
        QuantitativeValue => "QuantitativeValue";
        /// Quantitative value float
        ///
        /// An instance of this class is an actual float value for a quantitative property of a
        /// product. This instance is usually characterized by a minimal value, a maximal value,
        /// and a unit of measurement.
        QuantitativeValueFloat => "QuantitativeValueFloat";
        /// Quantitative value integer
        ///
        /// An instance of this class is an actual integer value for a quantitative property of
        /// a product. This instance is usually characterized by a minimal value, a maximal
        /// value, and a unit of measurement.
        QuantitativeValueInteger => "QuantitativeValueInteger";
        /// related Web Service (0..*)
        ///
        /// The URI of a SOAP or REST Web Service from which additional information about the
        /// gr:BusinessEntity, gr:Offering, gr:PriceSpecification, or gr:ProductOrService, or
        /// any other element, can be obtained. The recommended range is xsd:anyURI i.e., the
        /// URI of a SOAP or REST Web Service.
        relatedWebService => "relatedWebService";
        /// Repair (business function)
        ///
        /// This gr:BusinessFunction indicates that the gr:BusinessEntity offers (or seeks) the
        /// evaluation of the chances for repairing, and, if positive, repair of the specified
        /// gr:ProductOrService. Repairing means actions that restore the originally intended
        /// function of a product that suffers from outage or malfunction.
        Repair => "Repair";
        /// Reseller (business entity type)
        ///
        /// The gr:BusinessEntityType representing such agents that are purchasing the scope of
        /// products included in the gr:Offering for resale on the market. Resellers are also
        /// businesses, i.e., they are officially registered with the public administration and
        /// strive for profits by their activities.
        Reseller => "Reseller";
        /// Saturday (day of week)
        ///
        /// Saturday as a day of the week.
        Saturday => "Saturday";
        /// seeks (0..*)
        ///
        /// This links a gr:BusinessEntity to gr:Offering nodes that describe what the business
        /// entity is interested in (i.e., the buy side). If you want to express interest in
        /// offering something, use gr:offers instead. Note that this substitutes the former
        /// gr:BusinessFunction gr:Buy, which is now deprecated.
        seeks => "seeks";
        /// Sell (business function)
        ///
        /// This gr:BusinessFunction indicates that the gr:BusinessEntity offers to permanently
        /// transfer all property rights on the specified gr:ProductOrService.
        Sell => "Sell";
        /// serial number (0..*)
        ///
        /// The serial number or any alphanumeric identifier of a particular product. Note that
        /// serial number are unique only for the same brand or the same model, so you cannot
        /// infer from two occurrences of the same serial number that the objects to which they
        /// are attached are identical.
        serialNumber => "serialNumber";
        /// Some items
        ///
        /// A placeholder instance for unknown instances of a mass-produced commodity. This is
        /// used as a computationally cheap work-around for such instances that are not
        /// individually exposed on the Web but just stated to exist (i.e., which are
        /// existentially quantified).
        SomeItems => "SomeItems";
        /// successor of (0..*)
        ///
        /// This property indicates that the subject is a newer, often updated or improved
        /// variant of the gr:ProductOrServiceModel used as the object.
        successorOf => "successorOf";
        /// Sunday (day of week)
        ///
        /// Sunday as a day of the week.
        Sunday => "Sunday";
        /// Tax ID (0..1)
        ///
        /// The Tax / Fiscal ID of the gr:BusinessEntity, e.g. the TIN in the US or the CIF/NIF
        /// in Spain. It is usually assigned by the country of residence
        taxID => "taxID";
        /// Thursday (day of week)
        ///
        /// Thursday as a day of the week.
        Thursday => "Thursday";
        /// Tuesday (day of week)
        ///
        /// Tuesday as a day of the week.
        Tuesday => "Tuesday";
        /// Type and quantity node
        ///
        /// This class collates all the information about a gr:ProductOrService included in a
        /// bundle. If a gr:Offering contains just one item, you can directly link from the
        /// gr:Offering to the gr:ProductOrService using gr:includes. If the offering contains
        /// multiple items, use an instance of this class for each component to indicate the
        /// quantity, unit of measurement, and type of product, and link from the gr:Offering
        /// via gr:includesObject.
        TypeAndQuantityNode => "TypeAndQuantityNode";
        /// type of good (1..1)
        ///
        /// This specifies the gr:ProductOrService that the gr:TypeAndQuantityNode is referring
        /// to.
        typeOfGood => "typeOfGood";
        /// Unit price specification
        ///
        /// A unit price specification is a conceptual entity that specifies the price asked for
        /// a given gr:Offering by the respective gr:Business Entity. An offering may be linked
        /// to multiple unit price specifications that specify alternative prices for non-
        /// overlapping sets of conditions (e.g. quantities or sales regions) or with differing
        /// validity periods.
        UnitPriceSpecification => "UnitPriceSpecification";
        /// UPS (delivery method)
        ///
        /// Delivery via the parcel service UPS.
        UPS => "UPS";
        /// valid from (0..1)
        ///
        /// This property specifies the beginning of the validity of the gr:Offering,
        /// gr:PriceSpecification, gr:License, or gr:OpeningHoursSpecification. A time-zone
        /// should be specified. For a time in GMT/UTC, simply add a &quot;Z&quot; following the
        /// time:
        validFrom => "validFrom";
        /// valid through (0..1)
        ///
        /// This property specifies the end of the validity of the gr:Offering,
        /// gr:PriceSpecification, gr:License, or gr:OpeningHoursSpecification. A time-zone
        /// should be specified. For a time in GMT/UTC, simply add a &quot;Z&quot; following the
        /// time:
        validThrough => "validThrough";
        /// value added tax included (0..1)
        ///
        /// This property specifies whether the applicable value-added tax (VAT) is included in
        /// the price of the gr:PriceSpecification or not.
        valueAddedTaxIncluded => "valueAddedTaxIncluded";
        /// value reference (0..*)
        ///
        /// The superclass of properties that link a gr:QuantitativeValue or a
        /// gr:QualitativeValue to a second gr:QuantitativeValue or a gr:QualitativeValue that
        /// provides additional information on the original value. A good modeling practice is
        /// to define specializations of this property (e.g. foo:referenceTemperature) for your
        /// particular domain.
        valueReference => "valueReference";
        /// VAT ID (0..1)
        ///
        /// The Value-added Tax ID of the gr:BusinessEntity. See
        /// http://en.wikipedia.org/wiki/Value_added_tax_identification_number for details.
        vatID => "vatID";
        /// VISA (payment method)
        ///
        /// Payment by credit or debit cards issued by the VISA network.
        VISA => "VISA";
        /// Warranty promise
        ///
        /// This is a conceptual entity that holds together all aspects of the n-ary relation
        /// gr:hasWarrantyPromise.
        WarrantyPromise => "WarrantyPromise";
        /// Warranty scope
        ///
        /// The warranty scope represents types of services that will be provided free of charge
        /// by the vendor or manufacturer in the case of a defect (e.g. labor and parts, just
        /// parts), as part of the warranty included in an gr:Offering. The actual services may
        /// be provided by the gr:BusinessEntity making the offering, by the manufacturer of the
        /// product, or by a third party.
        WarrantyScope => "WarrantyScope";
        /// Wednesday (day of week)
        ///
        /// Wednesday as a day of the week.
        Wednesday => "Wednesday";
        /// weight (0..1)
        ///
        /// The weight of the gr:ProductOrService. Typical unit code(s): GRM for gram, KGM for
        /// kilogram, LBR for pound
        weight => "weight";
        /// width (0..1)
        ///
        /// The width of the gr:ProductOrService. Typical unit code(s): CMT for centimeters, INH
        /// for inches
        width => "width";
    }
}
