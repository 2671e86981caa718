//! The field table: API field names and the storage columns they are read from.
//!
//! Each entry lists the resolver name, the `Field` variant, the API name and
//! the column. The table generates the [`Field`] enum used in filters and one
//! resolver per field on [`Evaluation`].
use std::str::FromStr;

use async_graphql::Enum;
use async_graphql::Object;

use super::Evaluation;
use crate::error::ValidationError;
use crate::scalars::Datum;

macro_rules! field_table {
    ($($resolver:ident, $variant:ident, $name:tt, $column:tt;)*) => {
        /// A field of an evaluation, usable in a `FilterInput`.
        #[derive(Enum, Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Field {
            $(
                #[graphql(name = $name)]
                $variant,
            )*
        }

        impl Field {
            pub const ALL: &'static [Field] = &[$(Field::$variant),*];

            pub const fn api_name(self) -> &'static str {
                match self {
                    $(Field::$variant => $name,)*
                }
            }

            pub const fn column(self) -> &'static str {
                match self {
                    $(Field::$variant => $column,)*
                }
            }
        }

        #[Object(cache_control(max_age = 90))]
        impl Evaluation {
            $(
                #[graphql(name = $name)]
                async fn $resolver(&self) -> Option<Datum> {
                    self.datum($column)
                }
            )*
        }
    };
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.api_name() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

field_table! {
    year_built, YearBuilt, "yearBuilt", "YEARBUILT";
    eval_id, EvalId, "evalId", "EVAL_ID";
    id_number, IdNumber, "idNumber", "IDNUMBER";
    partner, Partner, "partner", "PARTNER";
    evaluator, Evaluator, "evaluator", "EVALUATOR";
    previous_file_id, PreviousFileId, "previousFileId", "PREVIOUSFILEID";
    status, Status, "status", "STATUS";
    creation_date, CreationDate, "creationDate", "CREATIONDATE";
    modification_date, ModificationDate, "modificationDate", "MODIFICATIONDATE";
    builder, Builder, "builder", "BUILDER";
    house_region, HouseRegion, "houseRegion", "HOUSEREGION";
    weather_location, WeatherLocation, "weatherLocation", "WEATHERLOC";
    entry_by, EntryBy, "entryBy", "ENTRYBY";
    client_city, ClientCity, "clientCity", "CLIENTCITY";
    client_address, ClientAddress, "clientAddress", "CLIENTADDR";
    client_postal_code, ClientPostalCode, "clientPostalCode", "CLIENTPCODE";
    client_name, ClientName, "clientName", "CLIENTNAME";
    telephone_number, TelephoneNumber, "telephoneNumber", "TELEPHONE";
    mailing_address, MailingAddress, "mailingAddress", "MAIL_ADDR";
    mailing_address_city, MailingAddressCity, "mailingAddressCity", "MAIL_CITY";
    mailing_address_region, MailingAddressRegion, "mailingAddressRegion", "MAIL_REGION";
    mailing_address_postal_code, MailingAddressPostalCode, "mailingAddressPostalCode", "MAIL_PCODE";
    tax_number, TaxNumber, "taxNumber", "TAXNUMBER";
    info1, Info1, "info1", "INFO1";
    info2, Info2, "info2", "INFO2";
    info3, Info3, "info3", "INFO3";
    info4, Info4, "info4", "INFO4";
    info5, Info5, "info5", "INFO5";
    info6, Info6, "info6", "INFO6";
    info7, Info7, "info7", "INFO7";
    info8, Info8, "info8", "INFO8";
    info9, Info9, "info9", "INFO9";
    info10, Info10, "info10", "INFO10";
    floor_area, FloorArea, "floorArea", "FLOORAREA";
    foot_print, FootPrint, "footPrint", "FOOTPRINT";
    furnace_type, FurnaceType, "furnaceType", "FURNACETYPE";
    furnace_steady_state_efficiency, FurnaceSteadyStateEfficiency, "furnaceSteadyStateEfficiency", "FURSSEFF";
    furnace_fuel, FurnaceFuel, "furnaceFuel", "FURNACEFUEL";
    heat_pump_supply_source, HeatPumpSupplySource, "heatPumpSupplySource", "HPSOURCE";
    heat_pump_coeffiecient_of_performance, HeatPumpCoeffiecientOfPerformance, "heatPumpCoeffiecientOfPerformance", "COP";
    hot_water_equipment_type, HotWaterEquipmentType, "hotWaterEquipmentType", "PDHWTYPE";
    hot_water_equipment_efficiency, HotWaterEquipmentEfficiency, "hotWaterEquipmentEfficiency", "PDHWEF";
    hot_water_equipment_fuel_type, HotWaterEquipmentFuelType, "hotWaterEquipmentFuelType", "PDHWFUEL";
    hot_water_heat_pump_system_type, HotWaterHeatPumpSystemType, "hotWaterHeatPumpSystemType", "DHWHPTYPE";
    hot_water_heat_pump_system_coefficienct_of_performance, HotWaterHeatPumpSystemCoefficienctOfPerformance, "hotWaterHeatPumpSystemCoefficienctOfPerformance", "DHWHPCOP";
    csia_rating, CsiaRating, "csiaRating", "CSIA";
    type_of_house, TypeOfHouse, "typeOfHouse", "TYPEOFHOUSE";
    ceiling_insulation_rsi_value, CeilingInsulationRsiValue, "ceilingInsulationRSIvalue", "CEILINS";
    foundation_wall_insulation_rsi_value, FoundationWallInsulationRsiValue, "foundationWallInsulationRSIvalue", "FNDWALLINS";
    main_wall_insulation_rsi, MainWallInsulationRsi, "mainWallInsulationRSI", "MAINWALLINS";
    storeys, Storeys, "storeys", "STOREYS";
    total_occupants, TotalOccupants, "totalOccupants", "TOTALOCCUPANTS";
    plan_shape, PlanShape, "planShape", "PLANSHAPE";
    basement_temperature, BasementTemperature, "basementTemperature", "TBSMNT";
    main_floor_temperature, MainFloorTemperature, "mainFloorTemperature", "TMAIN";
    house_volume, HouseVolume, "houseVolume", "HSEVOL";
    air_leakage_at50_pascals, AirLeakageAt50Pascals, "airLeakageAt50Pascals", "AIR50P";
    leakage_area_at10_pascals, LeakageAreaAt10Pascals, "leakageAreaAt10Pascals", "LEAKAR";
    central_ventilation_system_type, CentralVentilationSystemType, "centralVentilationSystemType", "CENVENTSYSTYPE";
    registration, Registration, "registration", "REGISTRATION";
    program_name, ProgramName, "programName", "PROGRAMNAME";
    eghf_electricity_consumption, EghfElectricityConsumption, "eghfElectricityConsumption", "EGHFCONELEC";
    eghf_gas_consumption, EghfGasConsumption, "eghfGasConsumption", "EGHFCONNGAS";
    eghf_oil_consumption, EghfOilConsumption, "eghfOilConsumption", "EGHFCONOIL";
    eghf_propane_consumption, EghfPropaneConsumption, "eghfPropaneConsumption", "EGHFCONPROP";
    eghf_total_energy_consumption, EghfTotalEnergyConsumption, "eghfTotalEnergyConsumption", "EGHFCONTOTAL";
    egh_estimated_annual_space_heating_energy_consumption, EghEstimatedAnnualSpaceHeatingEnergyConsumption, "eghEstimatedAnnualSpaceHeatingEnergyConsumption", "EGHSPACEENERGY";
    eghfcostelec, Eghfcostelec, "eghfcostelec", "EGHFCOSTELEC";
    eghfcostngas, Eghfcostngas, "eghfcostngas", "EGHFCOSTNGAS";
    eghfcostoil, Eghfcostoil, "eghfcostoil", "EGHFCOSTOIL";
    eghfcostprop, Eghfcostprop, "eghfcostprop", "EGHFCOSTPROP";
    eghfcosttotal, Eghfcosttotal, "eghfcosttotal", "EGHFCOSTTOTAL";
    eghcritnatach, Eghcritnatach, "eghcritnatach", "EGHCRITNATACH";
    eghcrittotach, Eghcrittotach, "eghcrittotach", "EGHCRITTOTACH";
    eghhlair, Eghhlair, "eghhlair", "EGHHLAIR";
    eghhlfound, Eghhlfound, "eghhlfound", "EGHHLFOUND";
    eghhlceiling, Eghhlceiling, "eghhlceiling", "EGHHLCEILING";
    eghhlwalls, Eghhlwalls, "eghhlwalls", "EGHHLWALLS";
    eghhlwindoor, Eghhlwindoor, "eghhlwindoor", "EGHHLWINDOOR";
    eghrating, Eghrating, "eghrating", "EGHRATING";
    ugrfurnacetyp, Ugrfurnacetyp, "ugrfurnacetyp", "UGRFURNACETYP";
    ugrfurnaceeff, Ugrfurnaceeff, "ugrfurnaceeff", "UGRFURNACEEFF";
    ugrfurnacefuel, Ugrfurnacefuel, "ugrfurnacefuel", "UGRFURNACEFUEL";
    ugrhptype, Ugrhptype, "ugrhptype", "UGRHPTYPE";
    ugrhpcop, Ugrhpcop, "ugrhpcop", "UGRHPCOP";
    ugrdhwsystype, Ugrdhwsystype, "ugrdhwsystype", "UGRDHWSYSTYPE";
    ugrdhwsysef, Ugrdhwsysef, "ugrdhwsysef", "UGRDHWSYSEF";
    ugrdhwsysfuel, Ugrdhwsysfuel, "ugrdhwsysfuel", "UGRDHWSYSFUEL";
    ugrdhwhptype, Ugrdhwhptype, "ugrdhwhptype", "UGRDHWHPTYPE";
    ugrdhwhpcop, Ugrdhwhpcop, "ugrdhwhpcop", "UGRDHWHPCOP";
    ugrdhwcsia, Ugrdhwcsia, "ugrdhwcsia", "UGRDHWCSIA";
    ugrceilins, Ugrceilins, "ugrceilins", "UGRCEILINS";
    ugrfndins, Ugrfndins, "ugrfndins", "UGRFNDINS";
    ugrwallins, Ugrwallins, "ugrwallins", "UGRWALLINS";
    ugrfconelec, Ugrfconelec, "ugrfconelec", "UGRFCONELEC";
    ugrfconngas, Ugrfconngas, "ugrfconngas", "UGRFCONNGAS";
    ugrfconoil, Ugrfconoil, "ugrfconoil", "UGRFCONOIL";
    ugrfconprop, Ugrfconprop, "ugrfconprop", "UGRFCONPROP";
    ugrfcontotal, Ugrfcontotal, "ugrfcontotal", "UGRFCONTOTAL";
    ugrfcostelec, Ugrfcostelec, "ugrfcostelec", "UGRFCOSTELEC";
    ugrfcostngas, Ugrfcostngas, "ugrfcostngas", "UGRFCOSTNGAS";
    ugrfcostoil, Ugrfcostoil, "ugrfcostoil", "UGRFCOSTOIL";
    ugrfcostprop, Ugrfcostprop, "ugrfcostprop", "UGRFCOSTPROP";
    ugrfcosttotal, Ugrfcosttotal, "ugrfcosttotal", "UGRFCOSTTOTAL";
    ugrair50pa, Ugrair50pa, "ugrair50pa", "UGRAIR50PA";
    ugrhlair, Ugrhlair, "ugrhlair", "UGRHLAIR";
    ugrhlfound, Ugrhlfound, "ugrhlfound", "UGRHLFOUND";
    ugrhlceiling, Ugrhlceiling, "ugrhlceiling", "UGRHLCEILING";
    ugrhlwalls, Ugrhlwalls, "ugrhlwalls", "UGRHLWALLS";
    ugrhlwindoor, Ugrhlwindoor, "ugrhlwindoor", "UGRHLWINDOOR";
    ugrrating, Ugrrating, "ugrrating", "UGRRATING";
    province, Province, "province", "PROVINCE";
    decadebuilt, Decadebuilt, "decadebuilt", "DECADEBUILT";
    location_id, LocationId, "location_id", "LOCATION_ID";
    eghfurnaceaec, Eghfurnaceaec, "eghfurnaceaec", "EGHFURNACEAEC";
    ugrfurnaceaec, Ugrfurnaceaec, "ugrfurnaceaec", "UGRFURNACEAEC";
    eghdeshtloss, Eghdeshtloss, "eghdeshtloss", "EGHDESHTLOSS";
    ugrdeshtloss, Ugrdeshtloss, "ugrdeshtloss", "UGRDESHTLOSS";
    eghfurseaeff, Eghfurseaeff, "eghfurseaeff", "EGHFURSEAEFF";
    ugrfurseaeff, Ugrfurseaeff, "ugrfurseaeff", "UGRFURSEAEFF";
    uceventsystype, Uceventsystype, "uceventsystype", "UCEVENTSYSTYPE";
    ugrcritnatach, Ugrcritnatach, "ugrcritnatach", "UGRCRITNATACH";
    eghhlexposedflr, Eghhlexposedflr, "eghhlexposedflr", "EGHHLEXPOSEDFLR";
    eghinexposedflr, Eghinexposedflr, "eghinexposedflr", "EGHINEXPOSEDFLR";
    ugrinexposedflr, Ugrinexposedflr, "ugrinexposedflr", "UGRINEXPOSEDFLR";
    ugrhlexposedflr, Ugrhlexposedflr, "ugrhlexposedflr", "UGRHLEXPOSEDFLR";
    ugrcrittotach, Ugrcrittotach, "ugrcrittotach", "UGRCRITTOTACH";
    ugrfurseaseff, Ugrfurseaseff, "ugrfurseaseff", "UGRFURSEASEFF";
    eghfurseaseff, Eghfurseaseff, "eghfurseaseff", "EGHFURSEASEFF";
    batch_number, BatchNumber, "batch_number", "BATCH_NUMBER";
    payable, Payable, "payable", "PAYABLE";
    eghfconwood, Eghfconwood, "eghfconwood", "EGHFCONWOOD";
    eghfcostwood, Eghfcostwood, "eghfcostwood", "EGHFCOSTWOOD";
    ugrfconwood, Ugrfconwood, "ugrfconwood", "UGRFCONWOOD";
    ugrfcostwood, Ugrfcostwood, "ugrfcostwood", "UGRFCOSTWOOD";
    otc, Otc, "otc", "OTC";
    vermiculite, Vermiculite, "vermiculite", "VERMICULITE";
    ponywallexists, Ponywallexists, "ponywallexists", "PONYWALLEXISTS";
    basementfloorar, Basementfloorar, "basementfloorar", "BASEMENTFLOORAR";
    walkoutfloorar, Walkoutfloorar, "walkoutfloorar", "WALKOUTFLOORAR";
    crawlspfloorar, Crawlspfloorar, "crawlspfloorar", "CRAWLSPFLOORAR";
    slabfloorar, Slabfloorar, "slabfloorar", "SLABFLOORAR";
    blowerdoortest, Blowerdoortest, "blowerdoortest", "BLOWERDOORTEST";
    fireplacedamp1, Fireplacedamp1, "fireplacedamp1", "FIREPLACEDAMP1";
    fireplacedamp2, Fireplacedamp2, "fireplacedamp2", "FIREPLACEDAMP2";
    heatsyssizeop, Heatsyssizeop, "heatsyssizeop", "HEATSYSSIZEOP";
    totalventsupply, Totalventsupply, "totalventsupply", "TOTALVENTSUPPLY";
    totalventexh, Totalventexh, "totalventexh", "TOTALVENTEXH";
    ugrtotalventsup, Ugrtotalventsup, "ugrtotalventsup", "UGRTOTALVENTSUP";
    ugrtotalventexh, Ugrtotalventexh, "ugrtotalventexh", "UGRTOTALVENTEXH";
    credit_pv, CreditPv, "credit_pv", "CREDIT_PV";
    credit_wind, CreditWind, "credit_wind", "CREDIT_WIND";
    ugrcredit_pv, UgrcreditPv, "ugrcredit_pv", "UGRCREDIT_PV";
    ugrcredit_wind, UgrcreditWind, "ugrcredit_wind", "UGRCREDIT_WIND";
    credit_thermst, CreditThermst, "credit_thermst", "CREDIT_THERMST";
    credit_vent, CreditVent, "credit_vent", "CREDIT_VENT";
    credit_garage, CreditGarage, "credit_garage", "CREDIT_GARAGE";
    credit_lighting, CreditLighting, "credit_lighting", "CREDIT_LIGHTING";
    credit_egh, CreditEgh, "credit_egh", "CREDIT_EGH";
    credit_oth1oth2, CreditOth1oth2, "credit_oth1oth2", "CREDIT_OTH1OTH2";
    windowcode, Windowcode, "windowcode", "WINDOWCODE";
    ugrwindowcode, Ugrwindowcode, "ugrwindowcode", "UGRWINDOWCODE";
    hrveff0c, Hrveff0c, "hrveff0c", "HRVEFF0C";
    unitsmurbs, Unitsmurbs, "unitsmurbs", "UNITSMURBS";
    visitedunits, Visitedunits, "visitedunits", "VISITEDUNITS";
    baseloadsmurb, Baseloadsmurb, "baseloadsmurb", "BASELOADSMURB";
    murbhtsystemdis, Murbhtsystemdis, "murbhtsystemdis", "MURBHTSYSTEMDIS";
    indfurnacetype, Indfurnacetype, "indfurnacetype", "INDFURNACETYPE";
    indfursseff, Indfursseff, "indfursseff", "INDFURSSEFF";
    indfurnacefuel, Indfurnacefuel, "indfurnacefuel", "INDFURNACEFUEL";
    ugrindfurnacetp, Ugrindfurnacetp, "ugrindfurnacetp", "UGRINDFURNACETP";
    ugrindfursseff, Ugrindfursseff, "ugrindfursseff", "UGRINDFURSSEFF";
    ugrindfurnacefu, Ugrindfurnacefu, "ugrindfurnacefu", "UGRINDFURNACEFU";
    sharedata, Sharedata, "sharedata", "SHAREDATA";
    estar, Estar, "estar", "ESTAR";
    depressexhaust, Depressexhaust, "depressexhaust", "DEPRESSEXHAUST";
    entrydate, Entrydate, "entrydate", "ENTRYDATE";
    furnacemodel, Furnacemodel, "furnacemodel", "FURNACEMODEL";
    buildername, Buildername, "buildername", "BUILDERNAME";
    ownership, Ownership, "ownership", "OWNERSHIP";
    eghheatfconse, Eghheatfconse, "eghheatfconse", "EGHHEATFCONSE";
    eghheatfconsg, Eghheatfconsg, "eghheatfconsg", "EGHHEATFCONSG";
    eghheatfconso, Eghheatfconso, "eghheatfconso", "EGHHEATFCONSO";
    eghheatfconsp, Eghheatfconsp, "eghheatfconsp", "EGHHEATFCONSP";
    eghheatfconsw, Eghheatfconsw, "eghheatfconsw", "EGHHEATFCONSW";
    ugrheatfconse, Ugrheatfconse, "ugrheatfconse", "UGRHEATFCONSE";
    ugrheatfconsg, Ugrheatfconsg, "ugrheatfconsg", "UGRHEATFCONSG";
    ugrheatfconso, Ugrheatfconso, "ugrheatfconso", "UGRHEATFCONSO";
    ugrheatfconsp, Ugrheatfconsp, "ugrheatfconsp", "UGRHEATFCONSP";
    ugrheatfconsw, Ugrheatfconsw, "ugrheatfconsw", "UGRHEATFCONSW";
    furdcmotor, Furdcmotor, "furdcmotor", "FURDCMOTOR";
    ugrfurdcmotor, Ugrfurdcmotor, "ugrfurdcmotor", "UGRFURDCMOTOR";
    hpestar, Hpestar, "hpestar", "HPESTAR";
    ugrhpestar, Ugrhpestar, "ugrhpestar", "UGRHPESTAR";
    nelecthermos, Nelecthermos, "nelecthermos", "NELECTHERMOS";
    ugrnelecthermos, Ugrnelecthermos, "ugrnelecthermos", "UGRNELECTHERMOS";
    epacsa, Epacsa, "epacsa", "EPACSA";
    ugrepacsa, Ugrepacsa, "ugrepacsa", "UGREPACSA";
    supphtgtype1, Supphtgtype1, "supphtgtype1", "SUPPHTGTYPE1";
    supphtgtype2, Supphtgtype2, "supphtgtype2", "SUPPHTGTYPE2";
    supphtgfuel1, Supphtgfuel1, "supphtgfuel1", "SUPPHTGFUEL1";
    supphtgfuel2, Supphtgfuel2, "supphtgfuel2", "SUPPHTGFUEL2";
    ugrsupphtgtype1, Ugrsupphtgtype1, "ugrsupphtgtype1", "UGRSUPPHTGTYPE1";
    ugrsupphtgtype2, Ugrsupphtgtype2, "ugrsupphtgtype2", "UGRSUPPHTGTYPE2";
    ugrsupphtgfuel1, Ugrsupphtgfuel1, "ugrsupphtgfuel1", "UGRSUPPHTGFUEL1";
    ugrsupphtgfuel2, Ugrsupphtgfuel2, "ugrsupphtgfuel2", "UGRSUPPHTGFUEL2";
    epacsasupphtg1, Epacsasupphtg1, "epacsasupphtg1", "EPACSASUPPHTG1";
    epacsasupphtg2, Epacsasupphtg2, "epacsasupphtg2", "EPACSASUPPHTG2";
    uepacsasupphtg1, Uepacsasupphtg1, "uepacsasupphtg1", "UEPACSASUPPHTG1";
    uepacsasupphtg2, Uepacsasupphtg2, "uepacsasupphtg2", "UEPACSASUPPHTG2";
    hviequip, Hviequip, "hviequip", "HVIEQUIP";
    ugrhviequip, Ugrhviequip, "ugrhviequip", "UGRHVIEQUIP";
    aircondtype, Aircondtype, "aircondtype", "AIRCONDTYPE";
    ugraircondtype, Ugraircondtype, "ugraircondtype", "UGRAIRCONDTYPE";
    aircop, Aircop, "aircop", "AIRCOP";
    ugraircop, Ugraircop, "ugraircop", "UGRAIRCOP";
    accentestar, Accentestar, "accentestar", "ACCENTESTAR";
    ugraccentestar, Ugraccentestar, "ugraccentestar", "UGRACCENTESTAR";
    acwindestar, Acwindestar, "acwindestar", "ACWINDESTAR";
    ugracwindestar, Ugracwindestar, "ugracwindestar", "UGRACWINDESTAR";
    fndhdr, Fndhdr, "fndhdr", "FNDHDR";
    ugrfndhdr, Ugrfndhdr, "ugrfndhdr", "UGRFNDHDR";
    numwindows, Numwindows, "numwindows", "NUMWINDOWS";
    numwinestar, Numwinestar, "numwinestar", "NUMWINESTAR";
    numdoors, Numdoors, "numdoors", "NUMDOORS";
    ugrnumwinestar, Ugrnumwinestar, "ugrnumwinestar", "UGRNUMWINESTAR";
    numdoorestar, Numdoorestar, "numdoorestar", "NUMDOORESTAR";
    ugrnumdoorestar, Ugrnumdoorestar, "ugrnumdoorestar", "UGRNUMDOORESTAR";
    acwindnum, Acwindnum, "acwindnum", "ACWINDNUM";
    ugracwindnum, Ugracwindnum, "ugracwindnum", "UGRACWINDNUM";
    heatafue, Heatafue, "heatafue", "HEATAFUE";
    ugrheatafue, Ugrheatafue, "ugrheatafue", "UGRHEATAFUE";
    ceilingtype, Ceilingtype, "ceilingtype", "CEILINGTYPE";
    ugrceilingtype, Ugrceilingtype, "ugrceilingtype", "UGRCEILINGTYPE";
    atticceilingdef, Atticceilingdef, "atticceilingdef", "ATTICCEILINGDEF";
    uattceilingdef, Uattceilingdef, "uattceilingdef", "UATTCEILINGDEF";
    caflaceilingdef, Caflaceilingdef, "caflaceilingdef", "CAFLACEILINGDEF";
    ucaflceilingdef, Ucaflceilingdef, "ucaflceilingdef", "UCAFLCEILINGDEF";
    fndtype, Fndtype, "fndtype", "FNDTYPE";
    ugrfndtype, Ugrfndtype, "ugrfndtype", "UGRFNDTYPE";
    fnddef, Fnddef, "fnddef", "FNDDEF";
    ugrfnddef, Ugrfnddef, "ugrfnddef", "UGRFNDDEF";
    walldef, Walldef, "walldef", "WALLDEF";
    ugrwalldef, Ugrwalldef, "ugrwalldef", "UGRWALLDEF";
    eincentive, Eincentive, "eincentive", "EINCENTIVE";
    lftoilets, Lftoilets, "lftoilets", "LFTOILETS";
    ulftoilets, Ulftoilets, "ulftoilets", "ULFTOILETS";
    dwhrl1m, Dwhrl1m, "dwhrl1m", "DWHRL1M";
    udwhrl1m, Udwhrl1m, "udwhrl1m", "UDWHRL1M";
    dwhrm1m, Dwhrm1m, "dwhrm1m", "DWHRM1M";
    udwhrm1m, Udwhrm1m, "udwhrm1m", "UDWHRM1M";
    wthdata, Wthdata, "wthdata", "WTHDATA";
    sdhwtype, Sdhwtype, "sdhwtype", "SDHWTYPE";
    sdhwef, Sdhwef, "sdhwef", "SDHWEF";
    sdhwfuel, Sdhwfuel, "sdhwfuel", "SDHWFUEL";
    sdhwhptype, Sdhwhptype, "sdhwhptype", "SDHWHPTYPE";
    sdhwhpcop, Sdhwhpcop, "sdhwhpcop", "SDHWHPCOP";
    ugrsdhwsystype, Ugrsdhwsystype, "ugrsdhwsystype", "UGRSDHWSYSTYPE";
    ugrsdhwsysef, Ugrsdhwsysef, "ugrsdhwsysef", "UGRSDHWSYSEF";
    ugrsdhwsysfuel, Ugrsdhwsysfuel, "ugrsdhwsysfuel", "UGRSDHWSYSFUEL";
    ugrsdhwhptype, Ugrsdhwhptype, "ugrsdhwhptype", "UGRSDHWHPTYPE";
    ugrsdhwhpcop, Ugrsdhwhpcop, "ugrsdhwhpcop", "UGRSDHWHPCOP";
    exposedfloor, Exposedfloor, "exposedfloor", "EXPOSEDFLOOR";
    ugexposedfloor, Ugexposedfloor, "ugexposedfloor", "UGEXPOSEDFLOOR";
    murbhsestar, Murbhsestar, "murbhsestar", "MURBHSESTAR";
    murbwoodepa, Murbwoodepa, "murbwoodepa", "MURBWOODEPA";
    murbashpestar, Murbashpestar, "murbashpestar", "MURBASHPESTAR";
    murbdwhrl1m, Murbdwhrl1m, "murbdwhrl1m", "MURBDWHRL1M";
    murbdwhrm1m, Murbdwhrm1m, "murbdwhrm1m", "MURBDWHRM1M";
    murbhrvhvi, Murbhrvhvi, "murbhrvhvi", "MURBHRVHVI";
    murbdhwins, Murbdhwins, "murbdhwins", "MURBDHWINS";
    murbdhwcond, Murbdhwcond, "murbdhwcond", "MURBDHWCOND";
    murbwoodheat, Murbwoodheat, "murbwoodheat", "MURBWOODHEAT";
    type1capacity, Type1capacity, "type1capacity", "TYPE1CAPACITY";
    pdhwestar, Pdhwestar, "pdhwestar", "PDHWESTAR";
    ugrpdhwestar, Ugrpdhwestar, "ugrpdhwestar", "UGRPDHWESTAR";
    sdhwestar, Sdhwestar, "sdhwestar", "SDHWESTAR";
    ugrsdhwestar, Ugrsdhwestar, "ugrsdhwestar", "UGRSDHWESTAR";
    murbdhwinses, Murbdhwinses, "murbdhwinses", "MURBDHWINSES";
    umurbdhwinses, Umurbdhwinses, "umurbdhwinses", "UMURBDHWINSES";
    murbdhwcondinses, Murbdhwcondinses, "murbdhwcondinses", "MURBDHWCONDINSES";
    umurbdhwcondines, Umurbdhwcondines, "umurbdhwcondines", "UMURBDHWCONDINES";
    hpcap, Hpcap, "hpcap", "HPCAP";
    acmodelnumber, Acmodelnumber, "acmodelnumber", "ACMODELNUMBER";
    mixuse, Mixuse, "mixuse", "MIXUSE";
    windowcodenum, Windowcodenum, "windowcodenum", "WINDOWCODENUM";
    uwindowcodenum, Uwindowcodenum, "uwindowcodenum", "UWINDOWCODENUM";
    cid, Cid, "cid", "CID";
    numsolsys, Numsolsys, "numsolsys", "NUMSOLSYS";
    totcsia, Totcsia, "totcsia", "TOTCSIA";
    largestcsia, Largestcsia, "largestcsia", "LARGESTCSIA";
    sndheatsys, Sndheatsys, "sndheatsys", "SNDHEATSYS";
    sndheatsysfuel, Sndheatsysfuel, "sndheatsysfuel", "SNDHEATSYSFUEL";
    sndheatsystype, Sndheatsystype, "sndheatsystype", "SNDHEATSYSTYPE";
    sndheatafue, Sndheatafue, "sndheatafue", "SNDHEATAFUE";
    sndheatdcmotor, Sndheatdcmotor, "sndheatdcmotor", "SNDHEATDCMOTOR";
    sndheatmanufacturer, Sndheatmanufacturer, "sndheatmanufacturer", "SNDHEATMANUFACTURER";
    sndheatmodel, Sndheatmodel, "sndheatmodel", "SNDHEATMODEL";
    sndheatestar, Sndheatestar, "sndheatestar", "SNDHEATESTAR";
    ugrsndheatsys, Ugrsndheatsys, "ugrsndheatsys", "UGRSNDHEATSYS";
    ugrsndheatsysfuel, Ugrsndheatsysfuel, "ugrsndheatsysfuel", "UGRSNDHEATSYSFUEL";
    ugrsndheatsystype, Ugrsndheatsystype, "ugrsndheatsystype", "UGRSNDHEATSYSTYPE";
    ugrsndheatafue, Ugrsndheatafue, "ugrsndheatafue", "UGRSNDHEATAFUE";
    ugrsndheatdcmotor, Ugrsndheatdcmotor, "ugrsndheatdcmotor", "UGRSNDHEATDCMOTOR";
    ugrsndheatmanufacturer, Ugrsndheatmanufacturer, "ugrsndheatmanufacturer", "UGRSNDHEATMANUFACTURER";
    ugrsndheatmodel, Ugrsndheatmodel, "ugrsndheatmodel", "UGRSNDHEATMODEL";
    ugrsndheatestar, Ugrsndheatestar, "ugrsndheatestar", "UGRSNDHEATESTAR";
    numwinzoned, Numwinzoned, "numwinzoned", "NUMWINZONED";
    numdoorzoned, Numdoorzoned, "numdoorzoned", "NUMDOORZONED";
    ugrnumwinzoned, Ugrnumwinzoned, "ugrnumwinzoned", "UGRNUMWINZONED";
    ugrnumdoorzoned, Ugrnumdoorzoned, "ugrnumdoorzoned", "UGRNUMDOORZONED";
    washermanufacturer, Washermanufacturer, "washermanufacturer", "WASHERMANUFACTURER";
    washermodel, Washermodel, "washermodel", "WASHERMODEL";
    washerestar, Washerestar, "washerestar", "WASHERESTAR";
    ugrwashermanufacturer, Ugrwashermanufacturer, "ugrwashermanufacturer", "UGRWASHERMANUFACTURER";
    ugrwashermodel, Ugrwashermodel, "ugrwashermodel", "UGRWASHERMODEL";
    ugrwasherestar, Ugrwasherestar, "ugrwasherestar", "UGRWASHERESTAR";
    dryerfuel, Dryerfuel, "dryerfuel", "DRYERFUEL";
    dryermanufacturer, Dryermanufacturer, "dryermanufacturer", "DRYERMANUFACTURER";
    dryermodel, Dryermodel, "dryermodel", "DRYERMODEL";
    ugrdryerfuel, Ugrdryerfuel, "ugrdryerfuel", "UGRDRYERFUEL";
    ugrdryermanufacturer, Ugrdryermanufacturer, "ugrdryermanufacturer", "UGRDRYERMANUFACTURER";
    ugrdryermodel, Ugrdryermodel, "ugrdryermodel", "UGRDRYERMODEL";
    estarlights, Estarlights, "estarlights", "ESTARLIGHTS";
    ugrestarlights, Ugrestarlights, "ugrestarlights", "UGRESTARLIGHTS";
    hviestar, Hviestar, "hviestar", "HVIESTAR";
    estarmurbhrvhvi, Estarmurbhrvhvi, "estarmurbhrvhvi", "ESTARMURBHRVHVI";
    ugrhviestar, Ugrhviestar, "ugrhviestar", "UGRHVIESTAR";
    ugrmurbhrvhvi, Ugrmurbhrvhvi, "ugrmurbhrvhvi", "UGRMURBHRVHVI";
    ugrestarmurbhrvhvi, Ugrestarmurbhrvhvi, "ugrestarmurbhrvhvi", "UGRESTARMURBHRVHVI";
    murbdhwstes, Murbdhwstes, "murbdhwstes", "MURBDHWSTES";
    ugrmurbdhwstes, Ugrmurbdhwstes, "ugrmurbdhwstes", "UGRMURBDHWSTES";
    eval_type, EvalType, "eval_type", "EVAL_TYPE";
    eid, Eid, "eid", "EID";
    house_id, HouseId, "house_id", "HOUSE_ID";
    justify, Justify, "justify", "JUSTIFY";
    energuide_rating, EnerguideRating, "energuideRating", "ERSRATING";
    ugrersrating, Ugrersrating, "ugrersrating", "UGRERSRATING";
    ersenergyintensity, Ersenergyintensity, "ersenergyintensity", "ERSENERGYINTENSITY";
    ugrersenergyintensity, Ugrersenergyintensity, "ugrersenergyintensity", "UGRERSENERGYINTENSITY";
    ersghg, Ersghg, "ersghg", "ERSGHG";
    ugrersghg, Ugrersghg, "ugrersghg", "UGRERSGHG";
    ersrenewableprod, Ersrenewableprod, "ersrenewableprod", "ERSRENEWABLEPROD";
    hocersrating, Hocersrating, "hocersrating", "HOCERSRATING";
    hocugrersrating, Hocugrersrating, "hocugrersrating", "HOCUGRERSRATING";
    ersrefhouserating, Ersrefhouserating, "ersrefhouserating", "ERSREFHOUSERATING";
    rulesetver, Rulesetver, "rulesetver", "RULESETVER";
    rulesettype, Rulesettype, "rulesettype", "RULESETTYPE";
    heatedfloorarea, Heatedfloorarea, "heatedfloorarea", "HEATEDFLOORAREA";
    ersrenewableelec, Ersrenewableelec, "ersrenewableelec", "ERSRENEWABLEELEC";
    ersspacecoolenergy, Ersspacecoolenergy, "ersspacecoolenergy", "ERSSPACECOOLENERGY";
    ersrenewablesolar, Ersrenewablesolar, "ersrenewablesolar", "ERSRENEWABLESOLAR";
    erswaterheatingenergy, Erswaterheatingenergy, "erswaterheatingenergy", "ERSWATERHEATINGENERGY";
    ersventilationenergy, Ersventilationenergy, "ersventilationenergy", "ERSVENTILATIONENERGY";
    erslightapplianceenergy, Erslightapplianceenergy, "erslightapplianceenergy", "ERSLIGHTAPPLIANCEENERGY";
    ersotherelecenergy, Ersotherelecenergy, "ersotherelecenergy", "ERSOTHERELECENERGY";
    ugrersspacecoolenergy, Ugrersspacecoolenergy, "ugrersspacecoolenergy", "UGRERSSPACECOOLENERGY";
    ugrerswaterheatingenergy, Ugrerswaterheatingenergy, "ugrerswaterheatingenergy", "UGRERSWATERHEATINGENERGY";
    ugrersventilationenergy, Ugrersventilationenergy, "ugrersventilationenergy", "UGRERSVENTILATIONENERGY";
    ugrerslightapplianceenergy, Ugrerslightapplianceenergy, "ugrerslightapplianceenergy", "UGRERSLIGHTAPPLIANCEENERGY";
    ugrersotherelecenergy, Ugrersotherelecenergy, "ugrersotherelecenergy", "UGRERSOTHERELECENERGY";
    erselecghg, Erselecghg, "erselecghg", "ERSELECGHG";
    ersngasghg, Ersngasghg, "ersngasghg", "ERSNGASGHG";
    ersoilghg, Ersoilghg, "ersoilghg", "ERSOILGHG";
    erspropghg, Erspropghg, "erspropghg", "ERSPROPGHG";
    erswoodghg, Erswoodghg, "erswoodghg", "ERSWOODGHG";
    ersrenewableelecghg, Ersrenewableelecghg, "ersrenewableelecghg", "ERSRENEWABLEELECGHG";
    ersrenewablesolarghg, Ersrenewablesolarghg, "ersrenewablesolarghg", "ERSRENEWABLESOLARGHG";
    ershlwindow, Ershlwindow, "ershlwindow", "ERSHLWINDOW";
    ershldoor, Ershldoor, "ershldoor", "ERSHLDOOR";
    ugrershlwindow, Ugrershlwindow, "ugrershlwindow", "UGRERSHLWINDOW";
    ugrershldoor, Ugrershldoor, "ugrershldoor", "UGRERSHLDOOR";
    ugrspaceenergy, Ugrspaceenergy, "ugrspaceenergy", "UGRSPACEENERGY";
    qwarn, Qwarn, "qwarn", "QWARN";
    qtot, Qtot, "qtot", "QTOT";
    dataset, Dataset, "dataset", "DATASET";
    eidef, Eidef, "eidef", "EIDEF";
    ugreidef, Ugreidef, "ugreidef", "UGREIDEF";
    buildingtype, Buildingtype, "buildingtype", "BUILDINGTYPE";
    eghfconwoodgj, Eghfconwoodgj, "eghfconwoodgj", "EGHFCONWOODGJ";
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn it_maps_api_names_to_columns() {
        assert_eq!(Field::YearBuilt.column(), "YEARBUILT");
        assert_eq!(Field::MailingAddressPostalCode.column(), "MAIL_PCODE");
        assert_eq!(
            Field::EghEstimatedAnnualSpaceHeatingEnergyConsumption.column(),
            "EGHSPACEENERGY"
        );
        assert_eq!(Field::LocationId.api_name(), "location_id");
    }

    #[test]
    fn it_parses_known_fields() {
        assert_eq!("yearBuilt".parse::<Field>(), Ok(Field::YearBuilt));
        assert_eq!("house_id".parse::<Field>(), Ok(Field::HouseId));
    }

    #[test]
    fn it_rejects_unknown_fields() {
        assert_eq!(
            "YEARBUILT".parse::<Field>(),
            Err(ValidationError::UnknownField("YEARBUILT".to_string()))
        );
        assert!("year_built".parse::<Field>().is_err());
    }

    #[test]
    fn names_and_columns_are_unique() {
        let names: HashSet<_> = Field::ALL.iter().map(|field| field.api_name()).collect();
        let columns: HashSet<_> = Field::ALL.iter().map(|field| field.column()).collect();
        assert_eq!(Field::ALL.len(), 380);
        assert_eq!(names.len(), Field::ALL.len());
        assert_eq!(columns.len(), Field::ALL.len());
    }
}
